use gloo_net::http::Request;
use web_sys::FormData;

use crate::models::{Car, Category, SessionData};
use crate::utils::constants::BACKEND_URL;

/// Stateless HTTP client for the Car Sell API. All business logic lives on
/// the server; this type only moves payloads.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Reference data for the category select.
    pub async fn get_categories(&self) -> Result<Vec<Category>, String> {
        let url = format!("{}/categories", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Vec<Category>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Every published ad.
    pub async fn get_cars(&self) -> Result<Vec<Car>, String> {
        let url = format!("{}/cars", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Vec<Car>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Publishes a new ad. `payload` is the multipart body assembled by the
    /// registration form: every vehicle field, the denormalized advertiser
    /// identity and the image file.
    pub async fn create_car(&self, payload: FormData) -> Result<Car, String> {
        let url = format!("{}/cars", self.base_url);

        log::info!("📤 Publishing ad");

        let response = Request::post(&url)
            .body(payload)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Car>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Deletes one ad by id.
    pub async fn delete_car(&self, id: i64) -> Result<(), String> {
        let url = format!("{}/cars/{}", self.base_url, id);

        log::info!("🗑️ Deleting ad {}", id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        Ok(())
    }

    /// Signs in and returns the session object the app persists locally.
    pub async fn create_session(&self, email: &str, password: &str) -> Result<SessionData, String> {
        let url = format!("{}/sessions", self.base_url);
        let request = SessionRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Signing in {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<SessionData>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }
}

#[derive(serde::Serialize)]
struct SessionRequest {
    email: String,
    password: String,
}
