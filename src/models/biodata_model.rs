use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiodataType {
    Male,
    Female,
}

impl BiodataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiodataType::Male => "male",
            BiodataType::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Result<BiodataType, String> {
        match value.to_ascii_lowercase().as_str() {
            "male" => Ok(BiodataType::Male),
            "female" => Ok(BiodataType::Female),
            other => Err(format!("biodataType must be male or female, got: {}", other)),
        }
    }
}

/// Image uploaded alongside a biodata form, stored inline in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileImage {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Biodata {
    pub _id: ObjectId,
    pub email: String,
    pub name: String,
    pub age: i32,
    #[serde(rename = "biodataType", default, skip_serializing_if = "Option::is_none")]
    pub biodata_type: Option<BiodataType>,
    #[serde(rename = "isMarried", default)]
    pub is_married: bool,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    #[serde(rename = "profileImage", default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ProfileImage>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn biodata_uses_frontend_field_names() {
        let biodata = Biodata {
            _id: ObjectId::new(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            age: 25,
            biodata_type: Some(BiodataType::Female),
            is_married: false,
            is_premium: true,
            profile_image: None,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };

        let doc = bson::to_document(&biodata).unwrap();
        assert_eq!(doc.get_str("biodataType").unwrap(), "female");
        assert!(!doc.get_bool("isMarried").unwrap());
        assert!(doc.get_bool("isPremium").unwrap());
        assert_eq!(doc.get_i32("age").unwrap(), 25);
        assert!(doc.get("profileImage").is_none());
        assert!(doc.get_datetime("createdAt").is_ok());
    }

    #[test]
    fn biodata_type_parse_is_case_insensitive() {
        assert_eq!(BiodataType::parse("Male").unwrap(), BiodataType::Male);
        assert_eq!(BiodataType::parse("female").unwrap(), BiodataType::Female);
        assert!(BiodataType::parse("other").is_err());
    }
}
