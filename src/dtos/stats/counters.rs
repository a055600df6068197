use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TotalBiodataResponse {
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct MaleBiodataResponse {
    pub male: u64,
}

#[derive(Debug, Serialize)]
pub struct FemaleBiodataResponse {
    pub female: u64,
}

#[derive(Debug, Serialize)]
pub struct PremiumBiodataResponse {
    pub premium: u64,
}

#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    pub revenue: f64,
}
