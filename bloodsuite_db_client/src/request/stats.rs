use models_bloodsuite::request::{PendingByBloodType, RequestStats};
use sqlx::PgPool;

/// Request counters for the staff overview.
#[tracing::instrument(skip(db))]
pub async fn request_stats(db: &PgPool) -> anyhow::Result<RequestStats> {
    let pending: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests WHERE status = 'pending'")
            .fetch_one(db)
            .await?;

    let urgent: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM blood_requests \
         WHERE urgency IN ('urgent', 'critical') AND status = 'pending'",
    )
    .fetch_one(db)
    .await?;

    let fulfilled: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests WHERE status = 'fulfilled'")
            .fetch_one(db)
            .await?;

    let by_blood_type = sqlx::query_as::<_, PendingByBloodType>(
        r#"
        SELECT blood_type, COUNT(*) AS count,
               COALESCE(SUM(units_needed), 0) AS units_needed
        FROM blood_requests
        WHERE status = 'pending'
        GROUP BY blood_type
        ORDER BY blood_type
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(RequestStats {
        pending,
        urgent,
        fulfilled,
        by_blood_type,
    })
}
