use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The fixed set of dashboard counters.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_donors: i64,
    pub total_hospitals: i64,
    pub available_units: i64,
    pub pending_requests: i64,
    pub urgent_requests: i64,
    pub expiring_units: i64,
    pub recent_donations: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct BloodTypeStock {
    pub blood_type: String,
    pub available: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub blood_type_stock: Vec<BloodTypeStock>,
}

/// One month of donation volume.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct DonationsTrendRow {
    pub month: Option<NaiveDateTime>,
    pub donations: i64,
    pub total_volume: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct TrendQuery {
    /// how many months back to aggregate, default 6
    pub months: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct DonorDistrictCount {
    pub district: String,
    pub donor_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct HospitalDistrictCount {
    pub district: String,
    pub hospital_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DistrictSummaryResponse {
    pub donors: Vec<DonorDistrictCount>,
    pub hospitals: Vec<HospitalDistrictCount>,
}
