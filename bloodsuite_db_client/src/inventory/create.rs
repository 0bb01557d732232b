use models_bloodsuite::inventory::{CreateInventoryUnitRequest, InventoryUnitRow};
use sqlx::PgPool;

/// Volume recorded for a unit when the intake form leaves it blank.
pub const DEFAULT_UNIT_VOLUME_ML: i32 = 450;

/// Adds a collected unit to a hospital's shelf.
#[tracing::instrument(
    skip(db, unit),
    fields(hospital_id=%unit.hospital_id, unit_number=%unit.unit_number)
)]
pub async fn create_inventory_unit(
    db: &PgPool,
    unit: &CreateInventoryUnitRequest,
) -> anyhow::Result<InventoryUnitRow> {
    let created = sqlx::query_as::<_, InventoryUnitRow>(
        r#"
        INSERT INTO blood_inventory
            (hospital_id, blood_type, unit_number, collection_date, expiry_date,
             volume_ml, storage_location)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(unit.hospital_id)
    .bind(unit.blood_type.as_str())
    .bind(&unit.unit_number)
    .bind(unit.collection_date)
    .bind(unit.expiry_date)
    .bind(unit.volume_ml.unwrap_or(DEFAULT_UNIT_VOLUME_ML))
    .bind(&unit.storage_location)
    .fetch_one(db)
    .await?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models_bloodsuite::BloodType;
    use sqlx::{Pool, Postgres};

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_create_unit_applies_defaults(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let request = CreateInventoryUnitRequest {
            hospital_id: 1,
            blood_type: BloodType::BNegative,
            unit_number: "BS-0100".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            volume_ml: None,
            storage_location: None,
        };

        let unit = create_inventory_unit(&pool, &request).await?;

        assert_eq!(unit.blood_type, "B-");
        assert_eq!(unit.volume_ml, DEFAULT_UNIT_VOLUME_ML);
        assert_eq!(unit.status, "available");

        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_duplicate_unit_number_rejected(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let request = CreateInventoryUnitRequest {
            hospital_id: 1,
            blood_type: BloodType::OPositive,
            unit_number: "BS-0001".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            volume_ml: Some(500),
            storage_location: None,
        };

        assert!(create_inventory_unit(&pool, &request).await.is_err());

        Ok(())
    }
}
