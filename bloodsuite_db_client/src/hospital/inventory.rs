use models_bloodsuite::inventory::BloodTypeInventorySummary;
use sqlx::PgPool;

/// Per-blood-type shelf counts for a single hospital.
#[tracing::instrument(skip(db))]
pub async fn hospital_inventory_summary(
    db: &PgPool,
    hospital_id: i32,
) -> anyhow::Result<Vec<BloodTypeInventorySummary>> {
    let summary = sqlx::query_as::<_, BloodTypeInventorySummary>(
        r#"
        SELECT blood_type,
               COUNT(*) FILTER (WHERE status = 'available') AS available,
               COUNT(*) FILTER (WHERE status = 'reserved') AS reserved,
               COUNT(*) FILTER (WHERE status = 'available'
                   AND expiry_date <= CURRENT_DATE + 7) AS expiring_soon
        FROM blood_inventory
        WHERE hospital_id = $1
        GROUP BY blood_type
        ORDER BY blood_type
        "#,
    )
    .bind(hospital_id)
    .fetch_all(db)
    .await?;

    Ok(summary)
}
