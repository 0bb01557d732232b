use models_bloodsuite::analytics::{
    DistrictSummaryResponse, DonorDistrictCount, HospitalDistrictCount,
};
use sqlx::PgPool;

/// Donor and verified-hospital headcounts per district.
#[tracing::instrument(skip(db))]
pub async fn district_summary(db: &PgPool) -> anyhow::Result<DistrictSummaryResponse> {
    let donors = sqlx::query_as::<_, DonorDistrictCount>(
        r#"
        SELECT district, COUNT(*) AS donor_count
        FROM donors
        WHERE district IS NOT NULL
        GROUP BY district
        ORDER BY donor_count DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    let hospitals = sqlx::query_as::<_, HospitalDistrictCount>(
        r#"
        SELECT district, COUNT(*) AS hospital_count
        FROM hospitals
        WHERE is_verified = TRUE AND district IS NOT NULL
        GROUP BY district
        ORDER BY hospital_count DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(DistrictSummaryResponse { donors, hospitals })
}
