use serde::{Deserialize, Serialize};

use crate::models::user_model::{Role, User};

#[derive(Debug, Deserialize)]
pub struct ManageUsersQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FilterUserDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
    #[serde(rename = "isRequestedPremium")]
    pub is_requested_premium: bool,
}

impl FilterUserDto {
    pub fn filter_user(user: &User) -> Self {
        FilterUserDto {
            id: user._id.to_string(),
            name: user.name.to_owned(),
            email: user.email.to_owned(),
            role: user.role,
            is_premium: user.is_premium,
            is_requested_premium: user.is_requested_premium,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserUpdateResponse {
    pub message: String,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn filter_user_maps_document_fields() {
        let user = User {
            _id: ObjectId::new(),
            name: "A".to_string(),
            email: Some("a@b.com".to_string()),
            role: Role::Admin,
            is_premium: true,
            is_requested_premium: false,
        };

        let dto = FilterUserDto::filter_user(&user);
        assert_eq!(dto.id, user._id.to_string());
        assert_eq!(dto.name, "A");
        assert_eq!(dto.email.as_deref(), Some("a@b.com"));
        assert_eq!(dto.role, Role::Admin);
        assert!(dto.is_premium);
        assert!(!dto.is_requested_premium);
    }
}
