use models_bloodsuite::inventory::InventoryUnitRow;
use models_bloodsuite::InventoryStatus;
use sqlx::PgPool;

/// Moves a unit to a new shelf status.
#[tracing::instrument(skip(db))]
pub async fn update_unit_status(
    db: &PgPool,
    unit_id: i32,
    status: InventoryStatus,
) -> anyhow::Result<Option<InventoryUnitRow>> {
    let unit = sqlx::query_as::<_, InventoryUnitRow>(
        r#"
        UPDATE blood_inventory SET status = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(unit_id)
    .fetch_optional(db)
    .await?;

    Ok(unit)
}
