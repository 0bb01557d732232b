use models_bloodsuite::hospital::{HospitalFilter, HospitalWithEmail};
use sqlx::PgPool;

const HOSPITAL_WITH_EMAIL_COLUMNS: &str = "h.id, h.user_id, h.name, h.registration_number, \
     h.address, h.district, h.city, h.latitude, h.longitude, h.contact_phone, \
     h.contact_email, h.is_verified, h.created_at, h.updated_at, u.email";

/// Lists hospitals, ANDing any supplied filters onto the base query.
#[tracing::instrument(skip(db))]
pub async fn list_hospitals(
    db: &PgPool,
    filter: &HospitalFilter,
) -> anyhow::Result<Vec<HospitalWithEmail>> {
    let mut query_builder = sqlx::QueryBuilder::new(format!(
        "SELECT {HOSPITAL_WITH_EMAIL_COLUMNS} \
         FROM hospitals h JOIN users u ON h.user_id = u.id WHERE u.is_active = TRUE"
    ));

    if let Some(district) = &filter.district {
        query_builder.push(" AND h.district = ").push_bind(district);
    }
    if let Some(is_verified) = filter.is_verified {
        query_builder
            .push(" AND h.is_verified = ")
            .push_bind(is_verified);
    }

    query_builder.push(" ORDER BY h.name");

    let hospitals = query_builder
        .build_query_as::<HospitalWithEmail>()
        .fetch_all(db)
        .await?;

    Ok(hospitals)
}

#[tracing::instrument(skip(db))]
pub async fn get_hospital(db: &PgPool, hospital_id: i32) -> anyhow::Result<Option<HospitalWithEmail>> {
    let hospital = sqlx::query_as::<_, HospitalWithEmail>(&format!(
        "SELECT {HOSPITAL_WITH_EMAIL_COLUMNS} \
         FROM hospitals h JOIN users u ON h.user_id = u.id WHERE h.id = $1"
    ))
    .bind(hospital_id)
    .fetch_optional(db)
    .await?;

    Ok(hospital)
}
