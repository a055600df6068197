use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::biodata_model::{Biodata, BiodataType, ProfileImage};

use super::{bool_from_form, parse_age};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateBiodataDto {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Age is required"))]
    pub age: String,

    pub biodata_type: String,

    pub is_married: String,
}

impl CreateBiodataDto {
    /// Coerces the raw form fields into a storable document. New records are
    /// never premium.
    pub fn into_biodata(self, profile_image: Option<ProfileImage>) -> Result<Biodata, String> {
        let age = parse_age(&self.age)?;
        let biodata_type = if self.biodata_type.is_empty() {
            None
        } else {
            Some(BiodataType::parse(&self.biodata_type)?)
        };

        Ok(Biodata {
            _id: ObjectId::new(),
            email: self.email,
            name: self.name,
            age,
            biodata_type,
            is_married: bool_from_form(&self.is_married),
            is_premium: false,
            profile_image,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateBiodataResponse {
    pub message: String,
    #[serde(rename = "biodataId")]
    pub biodata_id: String,
}
