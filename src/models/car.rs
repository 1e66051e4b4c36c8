use serde::{Deserialize, Serialize};

/// A published vehicle ad as the API returns it. The front-end only holds
/// transient copies; the API owns the record.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub version: String,
    pub year: String,
    pub price: String,
    pub km: String,
    pub description: String,
    pub category_id: i64,
    pub gear: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub user_name: String,
    pub user_email: String,
    pub user_number: String,
    pub user_state: String,
    pub user_city: String,
    #[serde(default)]
    pub user_allow_show_email: bool,
}

/// Filtered copy of the caller's list without the ad `id`. Order is kept;
/// the caller decides what to do with the copy (the modal never mutates the
/// list it was handed).
pub fn remove_car_by_id(cars: &[Car], id: i64) -> Vec<Car> {
    cars.iter().filter(|car| car.id != id).cloned().collect()
}

/// Draft of the registration form, collected from the fields on submit.
/// Everything is a raw string at this point; the API parses on its side.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub version: String,
    pub gear: String,
    pub year: String,
    pub price: String,
    pub km: String,
    pub description: String,
    pub category_id: String,
    pub has_file: bool,
}

/// One inline message per failed field, shown under the matching input.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct NewCarErrors {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
    pub gear: Option<String>,
    pub year: Option<String>,
    pub price: Option<String>,
    pub km: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub file: Option<String>,
}

impl NewCarErrors {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.model.is_none()
            && self.version.is_none()
            && self.gear.is_none()
            && self.year.is_none()
            && self.price.is_none()
            && self.km.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.file.is_none()
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    // Whitespace never satisfies a required field
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}

impl NewCar {
    /// Validation schema of the registration form. Submission is blocked
    /// while any field fails; no request leaves the browser in that case.
    pub fn validate(&self) -> NewCarErrors {
        let year = if self.year.trim().is_empty() {
            Some("O ano é obrigatório".to_string())
        } else if self.year.trim().chars().count() != 4 {
            Some("Digite um ano válido".to_string())
        } else {
            None
        };

        NewCarErrors {
            brand: required(&self.brand, "A marca é obrigatória"),
            model: required(&self.model, "O modelo é obrigatório"),
            version: required(&self.version, "A versão é obrigatória"),
            gear: required(&self.gear, "A transmissão é obrigatória"),
            year,
            price: required(&self.price, "O preço é obrigatório"),
            km: required(&self.km, "A quilometragem é obrigatória"),
            description: required(&self.description, "A descrição é obrigatória"),
            category_id: required(&self.category_id, "A categoria é obrigatória"),
            file: if self.has_file {
                None
            } else {
                Some("Carregue um arquivo".to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, model: &str) -> Car {
        Car {
            id,
            brand: "Nissan".to_string(),
            model: model.to_string(),
            version: "Nismo".to_string(),
            year: "2017".to_string(),
            price: "750.000,00".to_string(),
            km: "7500".to_string(),
            description: "Impecável".to_string(),
            category_id: 1,
            gear: "Manual".to_string(),
            image_url: None,
            user_name: "Ana Souza".to_string(),
            user_email: "ana@example.com".to_string(),
            user_number: "11987654321".to_string(),
            user_state: "SP".to_string(),
            user_city: "São Paulo".to_string(),
            user_allow_show_email: true,
        }
    }

    fn valid_draft() -> NewCar {
        NewCar {
            brand: "Nissan".to_string(),
            model: "GT-R".to_string(),
            version: "Nismo".to_string(),
            gear: "Manual".to_string(),
            year: "2017".to_string(),
            price: "750.000,00".to_string(),
            km: "7500".to_string(),
            description: "Muito novo".to_string(),
            category_id: "2".to_string(),
            has_file: true,
        }
    }

    #[test]
    fn remove_by_id_drops_only_that_car() {
        let cars = vec![car(1, "GT-R"), car(2, "Skyline"), car(3, "370Z")];

        let remaining = remove_car_by_id(&cars, 2);

        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|c| c.id != 2));
        let ids: Vec<i64> = remaining.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_by_id_with_absent_id_keeps_list() {
        let cars = vec![car(1, "GT-R")];
        assert_eq!(remove_car_by_id(&cars, 99).len(), 1);
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn each_missing_field_reports_its_own_message() {
        let mut draft = valid_draft();
        draft.brand = String::new();
        let errors = draft.validate();
        assert_eq!(errors.brand.as_deref(), Some("A marca é obrigatória"));
        assert!(errors.model.is_none());

        let mut draft = valid_draft();
        draft.gear = String::new();
        assert_eq!(
            draft.validate().gear.as_deref(),
            Some("A transmissão é obrigatória")
        );

        let mut draft = valid_draft();
        draft.category_id = String::new();
        assert_eq!(
            draft.validate().category_id.as_deref(),
            Some("A categoria é obrigatória")
        );
    }

    #[test]
    fn whitespace_does_not_satisfy_required() {
        let mut draft = valid_draft();
        draft.description = "   ".to_string();
        assert_eq!(
            draft.validate().description.as_deref(),
            Some("A descrição é obrigatória")
        );
    }

    #[test]
    fn year_must_have_four_digits() {
        let mut draft = valid_draft();
        draft.year = "20".to_string();
        assert_eq!(draft.validate().year.as_deref(), Some("Digite um ano válido"));

        draft.year = String::new();
        assert_eq!(draft.validate().year.as_deref(), Some("O ano é obrigatório"));
    }

    #[test]
    fn file_is_mandatory() {
        let mut draft = valid_draft();
        draft.has_file = false;
        assert_eq!(draft.validate().file.as_deref(), Some("Carregue um arquivo"));
    }
}
