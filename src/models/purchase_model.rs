use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// Written by the payment flow, read here only for the revenue sum.
#[derive(Debug, Serialize, Deserialize)]
pub struct Purchase {
    pub _id: ObjectId,
    pub price: f64,
}
