use models_bloodsuite::hospital::{HospitalRow, RegisterHospitalRequest};
use sqlx::PgPool;

/// Registers a hospital facility under an existing user account.
#[tracing::instrument(skip(db, request), fields(user_id=%request.user_id, name=%request.name))]
pub async fn create_hospital(
    db: &PgPool,
    request: &RegisterHospitalRequest,
) -> anyhow::Result<HospitalRow> {
    let hospital = sqlx::query_as::<_, HospitalRow>(
        r#"
        INSERT INTO hospitals
            (user_id, name, registration_number, address, district, city,
             latitude, longitude, contact_phone, contact_email)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.name)
    .bind(&request.registration_number)
    .bind(&request.address)
    .bind(&request.district)
    .bind(&request.city)
    .bind(request.latitude)
    .bind(request.longitude)
    .bind(&request.contact_phone)
    .bind(&request.contact_email)
    .fetch_one(db)
    .await?;

    Ok(hospital)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Pool, Postgres};

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_create_hospital_is_unverified(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let request = RegisterHospitalRequest {
            user_id: 1,
            name: "Motebang Hospital".to_string(),
            registration_number: Some("MH-77".to_string()),
            address: None,
            district: Some("Leribe".to_string()),
            city: Some("Hlotse".to_string()),
            latitude: Some(-28.8715),
            longitude: Some(28.0450),
            contact_phone: None,
            contact_email: None,
        };

        let hospital = create_hospital(&pool, &request).await?;

        assert_eq!(hospital.name, "Motebang Hospital");
        assert!(!hospital.is_verified);

        Ok(())
    }
}
