use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A `donations` row.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct DonationRow {
    pub id: i32,
    pub donor_id: i32,
    pub hospital_id: Option<i32>,
    pub donation_date: NaiveDate,
    pub volume_ml: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A donation joined with the name of the hospital it was given at.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct DonationWithHospital {
    pub id: i32,
    pub donor_id: i32,
    pub hospital_id: Option<i32>,
    pub donation_date: NaiveDate,
    pub volume_ml: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub hospital_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    pub donor_id: i32,
    pub hospital_id: Option<i32>,
    pub donation_date: NaiveDate,
    /// defaults to a standard 450ml unit
    pub volume_ml: Option<i32>,
    pub notes: Option<String>,
}
