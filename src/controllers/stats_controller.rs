use actix_web::{
    get,
    web::{self, Data, Json},
    Error,
};

use crate::{
    dtos::stats::counters::{
        FemaleBiodataResponse, MaleBiodataResponse, PremiumBiodataResponse, RevenueResponse,
        TotalBiodataResponse,
    },
    models::biodata_model::BiodataType,
    services::db::Database,
};

use super::store_error;

// Initialize routes
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(total_biodata)
        .service(male_biodata)
        .service(female_biodata)
        .service(premium_biodata)
        .service(revenue);
}

#[get("/total-biodata")]
pub async fn total_biodata(db: Data<Database>) -> Result<Json<TotalBiodataResponse>, Error> {
    let total = db
        .count_biodata()
        .await
        .map_err(|e| store_error("Failed to count biodata", e))?;

    Ok(Json(TotalBiodataResponse { total }))
}

#[get("/male-biodata")]
pub async fn male_biodata(db: Data<Database>) -> Result<Json<MaleBiodataResponse>, Error> {
    let male = db
        .count_biodata_by_type(BiodataType::Male)
        .await
        .map_err(|e| store_error("Failed to count male biodata", e))?;

    Ok(Json(MaleBiodataResponse { male }))
}

#[get("/female-biodata")]
pub async fn female_biodata(db: Data<Database>) -> Result<Json<FemaleBiodataResponse>, Error> {
    let female = db
        .count_biodata_by_type(BiodataType::Female)
        .await
        .map_err(|e| store_error("Failed to count female biodata", e))?;

    Ok(Json(FemaleBiodataResponse { female }))
}

#[get("/premium-biodata")]
pub async fn premium_biodata(db: Data<Database>) -> Result<Json<PremiumBiodataResponse>, Error> {
    let premium = db
        .count_premium_biodata()
        .await
        .map_err(|e| store_error("Failed to count premium biodata", e))?;

    Ok(Json(PremiumBiodataResponse { premium }))
}

#[get("/revenue")]
pub async fn revenue(db: Data<Database>) -> Result<Json<RevenueResponse>, Error> {
    let revenue = db
        .total_revenue()
        .await
        .map_err(|e| store_error("Failed to aggregate revenue", e))?;

    Ok(Json(RevenueResponse { revenue }))
}
