use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, denormalized into every ad they post.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserData {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    pub state: String,
    pub city: String,
    #[serde(default)]
    pub allow_show_email: bool,
    /// ISO `YYYY-MM-DD`
    pub birth_date: String,
}

impl UserData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

/// What `POST sessions` answers and what persists under the session storage
/// key. The token is opaque to the front-end.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionData {
    pub token: String,
    pub user: UserData,
}
