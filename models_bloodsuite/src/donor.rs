use crate::types::BloodType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A `donors` row.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct DonorRow {
    pub id: i32,
    pub user_id: i32,
    pub blood_type: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub weight_kg: Option<f64>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub is_eligible: bool,
    pub last_donation_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A donor joined with the contact fields of its user account.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct DonorWithContact {
    pub id: i32,
    pub user_id: i32,
    pub blood_type: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub weight_kg: Option<f64>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub is_eligible: bool,
    pub last_donation_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Optional filters for the donor directory.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DonorFilter {
    pub blood_type: Option<String>,
    pub district: Option<String>,
    pub is_eligible: Option<bool>,
}

/// Partial update of a donor's own profile; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDonorProfileRequest {
    pub blood_type: Option<BloodType>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct BloodTypeCount {
    pub blood_type: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct DistrictCount {
    pub district: String,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonorStats {
    pub total: i64,
    pub eligible: i64,
    pub by_blood_type: Vec<BloodTypeCount>,
    pub by_district: Vec<DistrictCount>,
}
