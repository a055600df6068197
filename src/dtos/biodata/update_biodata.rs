use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::models::biodata_model::BiodataType;

use super::{bool_from_form, parse_age};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateBiodataDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<String>,
    #[serde(rename = "biodataType")]
    pub biodata_type: Option<String>,
    #[serde(rename = "isMarried")]
    pub is_married: Option<String>,
    #[serde(rename = "isPremium")]
    pub is_premium: Option<String>,
}

impl UpdateBiodataDto {
    /// Builds the `$set` document for a partial update. Only the provided
    /// fields appear, coerced the same way creation coerces them, plus a
    /// refreshed `updatedAt`.
    pub fn into_update_document(self) -> Result<Document, String> {
        let mut update = Document::new();

        if let Some(email) = self.email {
            if email.trim().is_empty() {
                return Err("email must not be empty".to_string());
            }
            update.insert("email", email);
        }
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
            update.insert("name", name);
        }
        if let Some(age) = self.age {
            update.insert("age", parse_age(&age)?);
        }
        if let Some(biodata_type) = self.biodata_type {
            update.insert("biodataType", BiodataType::parse(&biodata_type)?.as_str());
        }
        if let Some(is_married) = self.is_married {
            update.insert("isMarried", bool_from_form(&is_married));
        }
        if let Some(is_premium) = self.is_premium {
            update.insert("isPremium", bool_from_form(&is_premium));
        }

        if update.is_empty() {
            return Err("no fields provided to update".to_string());
        }
        update.insert("updatedAt", DateTime::now());

        Ok(update)
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBiodataResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_provided_fields_are_set() {
        let dto = UpdateBiodataDto {
            age: Some("26".to_string()),
            ..Default::default()
        };

        let update = dto.into_update_document().unwrap();
        assert_eq!(update.get_i32("age").unwrap(), 26);
        assert!(update.get("email").is_none());
        assert!(update.get("name").is_none());
        assert!(update.get("isMarried").is_none());
        assert!(update.get_datetime("updatedAt").is_ok());
    }

    #[test]
    fn coercions_match_creation() {
        let dto = UpdateBiodataDto {
            age: Some("30".to_string()),
            biodata_type: Some("Female".to_string()),
            is_married: Some("true".to_string()),
            is_premium: Some("false".to_string()),
            ..Default::default()
        };

        let update = dto.into_update_document().unwrap();
        assert_eq!(update.get_i32("age").unwrap(), 30);
        assert_eq!(update.get_str("biodataType").unwrap(), "female");
        assert!(update.get_bool("isMarried").unwrap());
        assert!(!update.get_bool("isPremium").unwrap());
    }

    #[test]
    fn empty_payload_is_rejected() {
        let dto = UpdateBiodataDto::default();
        assert!(dto.into_update_document().is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dto = UpdateBiodataDto {
            age: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(dto.into_update_document().is_err());

        let dto = UpdateBiodataDto {
            biodata_type: Some("unknown".to_string()),
            ..Default::default()
        };
        assert!(dto.into_update_document().is_err());

        let dto = UpdateBiodataDto {
            email: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(dto.into_update_document().is_err());
    }

    #[test]
    fn deserializes_from_frontend_field_names() {
        let payload = serde_json::json!({
            "biodataType": "male",
            "isMarried": "false",
            "age": "26",
        });

        let dto: UpdateBiodataDto = serde_json::from_value(payload).unwrap();
        assert_eq!(dto.biodata_type.as_deref(), Some("male"));
        assert_eq!(dto.is_married.as_deref(), Some("false"));
        assert_eq!(dto.age.as_deref(), Some("26"));
        assert!(dto.email.is_none());
    }
}
