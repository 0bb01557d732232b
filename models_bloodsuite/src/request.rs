use crate::types::{BloodType, RequestStatus, Urgency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A `blood_requests` row.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct BloodRequestRow {
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type: String,
    pub units_needed: i32,
    pub units_fulfilled: i32,
    pub urgency: String,
    pub status: String,
    pub patient_name: Option<String>,
    pub patient_condition: Option<String>,
    pub notes: Option<String>,
    pub requested_by: Option<i32>,
    pub approved_by: Option<i32>,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A request joined with its hospital and requester names for listing.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct BloodRequestSummary {
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type: String,
    pub units_needed: i32,
    pub units_fulfilled: i32,
    pub urgency: String,
    pub status: String,
    pub patient_name: Option<String>,
    pub patient_condition: Option<String>,
    pub notes: Option<String>,
    pub requested_by: Option<i32>,
    pub approved_by: Option<i32>,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub hospital_name: String,
    pub requested_by_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub urgency: Option<Urgency>,
    pub hospital_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBloodRequestRequest {
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub units_needed: i32,
    /// defaults to normal
    pub urgency: Option<Urgency>,
    pub patient_name: Option<String>,
    pub patient_condition: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatusRequest {
    pub status: RequestStatus,
    pub units_fulfilled: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct PendingByBloodType {
    pub blood_type: String,
    pub count: i64,
    pub units_needed: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestStats {
    pub pending: i64,
    pub urgent: i64,
    pub fulfilled: i64,
    pub by_blood_type: Vec<PendingByBloodType>,
}
