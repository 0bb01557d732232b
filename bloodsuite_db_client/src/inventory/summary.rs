use models_bloodsuite::inventory::{BloodTypeInventorySummary, InventorySummary, InventoryTotals};
use sqlx::PgPool;

/// Store-wide shelf summary: per-blood-type counts plus overall totals.
/// Each count re-queries the store; consistency across them is best-effort.
#[tracing::instrument(skip(db))]
pub async fn inventory_summary(db: &PgPool) -> anyhow::Result<InventorySummary> {
    let by_blood_type = sqlx::query_as::<_, BloodTypeInventorySummary>(
        r#"
        SELECT blood_type,
               COUNT(*) FILTER (WHERE status = 'available') AS available,
               COUNT(*) FILTER (WHERE status = 'reserved') AS reserved,
               COUNT(*) FILTER (WHERE status = 'available'
                   AND expiry_date <= CURRENT_DATE + 7) AS expiring_soon
        FROM blood_inventory
        GROUP BY blood_type
        ORDER BY blood_type
        "#,
    )
    .fetch_all(db)
    .await?;

    let totals = sqlx::query_as::<_, InventoryTotals>(
        r#"
        SELECT COUNT(*) AS total_units,
               COUNT(*) FILTER (WHERE status = 'available') AS available_units,
               COUNT(*) FILTER (WHERE status = 'available'
                   AND expiry_date <= CURRENT_DATE + 3) AS critical_expiry
        FROM blood_inventory
        "#,
    )
    .fetch_one(db)
    .await?;

    Ok(InventorySummary {
        by_blood_type,
        totals,
    })
}
