use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub _id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    #[serde(rename = "isRequestedPremium", default)]
    pub is_requested_premium: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn role_defaults_to_user_when_missing() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "name": "A",
        };
        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_premium);
        assert!(!user.is_requested_premium);
    }

    #[test]
    fn role_uses_lowercase_wire_form() {
        let doc = doc! {
            "_id": ObjectId::new(),
            "name": "A",
            "role": "admin",
            "isRequestedPremium": true,
        };
        let user: User = bson::from_document(doc).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_requested_premium);
    }
}
