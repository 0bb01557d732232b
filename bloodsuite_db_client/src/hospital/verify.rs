use models_bloodsuite::hospital::HospitalRow;
use sqlx::PgPool;

/// Flips a hospital's verified flag. Only verified hospitals show up in
/// verified-only listings.
#[tracing::instrument(skip(db))]
pub async fn set_hospital_verified(
    db: &PgPool,
    hospital_id: i32,
    is_verified: bool,
) -> anyhow::Result<Option<HospitalRow>> {
    let hospital = sqlx::query_as::<_, HospitalRow>(
        r#"
        UPDATE hospitals SET is_verified = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(is_verified)
    .bind(hospital_id)
    .fetch_optional(db)
    .await?;

    Ok(hospital)
}
