use models_bloodsuite::donor::{DonorRow, UpdateDonorProfileRequest};
use sqlx::PgPool;

/// COALESCE-partial update of a donor's own profile; absent fields keep
/// their stored value. Returns None when the user has no donor row.
#[tracing::instrument(skip(db, update))]
pub async fn update_donor_profile(
    db: &PgPool,
    user_id: i32,
    update: &UpdateDonorProfileRequest,
) -> anyhow::Result<Option<DonorRow>> {
    let blood_type = update.blood_type.map(|blood_type| blood_type.as_str());

    let donor = sqlx::query_as::<_, DonorRow>(
        r#"
        UPDATE donors SET
            blood_type = COALESCE($1, blood_type),
            date_of_birth = COALESCE($2, date_of_birth),
            gender = COALESCE($3, gender),
            weight_kg = COALESCE($4, weight_kg),
            address = COALESCE($5, address),
            district = COALESCE($6, district),
            emergency_contact_name = COALESCE($7, emergency_contact_name),
            emergency_contact_phone = COALESCE($8, emergency_contact_phone),
            updated_at = NOW()
        WHERE user_id = $9
        RETURNING *
        "#,
    )
    .bind(blood_type)
    .bind(update.date_of_birth)
    .bind(&update.gender)
    .bind(update.weight)
    .bind(&update.address)
    .bind(&update.district)
    .bind(&update.emergency_contact_name)
    .bind(&update.emergency_contact_phone)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(donor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_bloodsuite::BloodType;
    use sqlx::{Pool, Postgres};

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_partial_update_keeps_absent_fields(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let update = UpdateDonorProfileRequest {
            weight: Some(72.5),
            gender: Some("male".to_string()),
            ..Default::default()
        };

        let donor = update_donor_profile(&pool, 2, &update).await?.expect("donor row");

        assert_eq!(donor.weight_kg, Some(72.5));
        assert_eq!(donor.gender.as_deref(), Some("male"));
        // untouched fields keep their seeded values
        assert_eq!(donor.blood_type, "O-");
        assert_eq!(donor.district.as_deref(), Some("Maseru"));

        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_update_changes_blood_type(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let update = UpdateDonorProfileRequest {
            blood_type: Some(BloodType::AbNegative),
            ..Default::default()
        };

        let donor = update_donor_profile(&pool, 2, &update).await?.expect("donor row");
        assert_eq!(donor.blood_type, "AB-");

        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_update_without_donor_row(pool: Pool<Postgres>) -> anyhow::Result<()> {
        // the admin user has no donor profile
        let donor = update_donor_profile(&pool, 1, &UpdateDonorProfileRequest::default()).await?;
        assert!(donor.is_none());

        Ok(())
    }
}
