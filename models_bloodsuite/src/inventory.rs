use crate::types::{BloodType, InventoryStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A `blood_inventory` row: one physical unit of blood.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct InventoryUnitRow {
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type: String,
    pub unit_number: String,
    pub collection_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub volume_ml: i32,
    pub status: String,
    pub storage_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct InventoryUnitWithHospital {
    pub id: i32,
    pub hospital_id: i32,
    pub blood_type: String,
    pub unit_number: String,
    pub collection_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub volume_ml: i32,
    pub status: String,
    pub storage_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub hospital_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFilter {
    pub blood_type: Option<String>,
    pub status: Option<InventoryStatus>,
    pub hospital_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryUnitRequest {
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub unit_number: String,
    pub collection_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// defaults to a standard 450ml unit
    pub volume_ml: Option<i32>,
    pub storage_location: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateInventoryStatusRequest {
    pub status: InventoryStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ExpiringQuery {
    /// window in days, default 7
    pub days: Option<i32>,
}

/// Per-blood-type shelf counts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct BloodTypeInventorySummary {
    pub blood_type: String,
    pub available: i64,
    pub reserved: i64,
    pub expiring_soon: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct InventoryTotals {
    pub total_units: i64,
    pub available_units: i64,
    pub critical_expiry: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub by_blood_type: Vec<BloodTypeInventorySummary>,
    pub totals: InventoryTotals,
}
