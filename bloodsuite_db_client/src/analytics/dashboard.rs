use models_bloodsuite::analytics::{BloodTypeStock, DashboardResponse, DashboardStats};
use sqlx::PgPool;

/// The fixed set of dashboard counters plus per-blood-type stock.
///
/// Each counter is its own query; the numbers are best-effort consistent,
/// never a single snapshot.
#[tracing::instrument(skip(db))]
pub async fn dashboard(db: &PgPool) -> anyhow::Result<DashboardResponse> {
    let total_donors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donors")
        .fetch_one(db)
        .await?;

    let total_hospitals: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM hospitals WHERE is_verified = TRUE")
            .fetch_one(db)
            .await?;

    let available_units: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM blood_inventory WHERE status = 'available'")
            .fetch_one(db)
            .await?;

    let pending_requests: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests WHERE status = 'pending'")
            .fetch_one(db)
            .await?;

    let urgent_requests: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM blood_requests \
         WHERE status = 'pending' AND urgency IN ('urgent', 'critical')",
    )
    .fetch_one(db)
    .await?;

    let expiring_units: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM blood_inventory \
         WHERE status = 'available' AND expiry_date <= CURRENT_DATE + 7",
    )
    .fetch_one(db)
    .await?;

    let recent_donations: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM donations WHERE donation_date >= CURRENT_DATE - 30",
    )
    .fetch_one(db)
    .await?;

    let blood_type_stock = sqlx::query_as::<_, BloodTypeStock>(
        r#"
        SELECT blood_type,
               COUNT(*) FILTER (WHERE status = 'available') AS available
        FROM blood_inventory
        GROUP BY blood_type
        ORDER BY blood_type
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(DashboardResponse {
        stats: DashboardStats {
            total_donors,
            total_hospitals,
            available_units,
            pending_requests,
            urgent_requests,
            expiring_units,
            recent_donations,
        },
        blood_type_stock,
    })
}
