use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A `hospitals` row.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct HospitalRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hospital joined with the email of its user account.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct HospitalWithEmail {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct HospitalFilter {
    pub district: Option<String>,
    pub is_verified: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterHospitalRequest {
    pub user_id: i32,
    pub name: String,
    pub registration_number: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyHospitalRequest {
    pub is_verified: bool,
}
