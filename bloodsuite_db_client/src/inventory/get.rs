use models_bloodsuite::inventory::{InventoryFilter, InventoryUnitWithHospital};
use sqlx::PgPool;

const UNIT_WITH_HOSPITAL_COLUMNS: &str = "bi.id, bi.hospital_id, bi.blood_type, \
     bi.unit_number, bi.collection_date, bi.expiry_date, bi.volume_ml, bi.status, \
     bi.storage_location, bi.created_at, bi.updated_at, h.name AS hospital_name";

/// Lists inventory units, soonest expiry first, ANDing any supplied filters.
#[tracing::instrument(skip(db))]
pub async fn list_inventory(
    db: &PgPool,
    filter: &InventoryFilter,
) -> anyhow::Result<Vec<InventoryUnitWithHospital>> {
    let mut query_builder = sqlx::QueryBuilder::new(format!(
        "SELECT {UNIT_WITH_HOSPITAL_COLUMNS} \
         FROM blood_inventory bi JOIN hospitals h ON bi.hospital_id = h.id"
    ));

    if filter.blood_type.is_some() || filter.status.is_some() || filter.hospital_id.is_some() {
        query_builder.push(" WHERE ");
    }

    let mut first_condition = true;

    if let Some(blood_type) = &filter.blood_type {
        query_builder.push("bi.blood_type = ").push_bind(blood_type);
        first_condition = false;
    }
    if let Some(status) = filter.status {
        if !first_condition {
            query_builder.push(" AND ");
        }
        query_builder.push("bi.status = ").push_bind(status.as_str());
        first_condition = false;
    }
    if let Some(hospital_id) = filter.hospital_id {
        if !first_condition {
            query_builder.push(" AND ");
        }
        query_builder.push("bi.hospital_id = ").push_bind(hospital_id);
    }

    query_builder.push(" ORDER BY bi.expiry_date ASC");

    let units = query_builder
        .build_query_as::<InventoryUnitWithHospital>()
        .fetch_all(db)
        .await?;

    Ok(units)
}

/// Available units whose expiry date falls within the next `days` days.
#[tracing::instrument(skip(db))]
pub async fn expiring_units(
    db: &PgPool,
    days: i32,
) -> anyhow::Result<Vec<InventoryUnitWithHospital>> {
    let units = sqlx::query_as::<_, InventoryUnitWithHospital>(&format!(
        "SELECT {UNIT_WITH_HOSPITAL_COLUMNS} \
         FROM blood_inventory bi JOIN hospitals h ON bi.hospital_id = h.id \
         WHERE bi.expiry_date <= CURRENT_DATE + $1 AND bi.status = 'available' \
         ORDER BY bi.expiry_date ASC"
    ))
    .bind(days)
    .fetch_all(db)
    .await?;

    Ok(units)
}
