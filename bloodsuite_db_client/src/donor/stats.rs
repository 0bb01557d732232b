use models_bloodsuite::donor::{BloodTypeCount, DistrictCount, DonorStats};
use sqlx::PgPool;

/// Donor headcounts, overall and broken down by blood type and district.
#[tracing::instrument(skip(db))]
pub async fn donor_stats(db: &PgPool) -> anyhow::Result<DonorStats> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donors")
        .fetch_one(db)
        .await?;

    let eligible: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM donors WHERE is_eligible = TRUE")
            .fetch_one(db)
            .await?;

    let by_blood_type = sqlx::query_as::<_, BloodTypeCount>(
        r#"
        SELECT blood_type, COUNT(*) AS count
        FROM donors
        GROUP BY blood_type
        ORDER BY blood_type
        "#,
    )
    .fetch_all(db)
    .await?;

    let by_district = sqlx::query_as::<_, DistrictCount>(
        r#"
        SELECT district, COUNT(*) AS count
        FROM donors
        WHERE district IS NOT NULL
        GROUP BY district
        ORDER BY count DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(DonorStats {
        total,
        eligible,
        by_blood_type,
        by_district,
    })
}
