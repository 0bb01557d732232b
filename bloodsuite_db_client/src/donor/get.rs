use models_bloodsuite::donor::{DonorFilter, DonorRow, DonorWithContact};
use sqlx::PgPool;

const DONOR_WITH_CONTACT_COLUMNS: &str = "d.id, d.user_id, d.blood_type, d.date_of_birth, \
     d.gender, d.weight_kg, d.address, d.district, d.emergency_contact_name, \
     d.emergency_contact_phone, d.is_eligible, d.last_donation_date, d.created_at, \
     d.updated_at, u.email, u.first_name, u.last_name, u.phone";

/// Lists donors for the directory, ANDing any supplied filters onto the base
/// query. Donors of deactivated accounts never appear.
#[tracing::instrument(skip(db))]
pub async fn list_donors(
    db: &PgPool,
    filter: &DonorFilter,
) -> anyhow::Result<Vec<DonorWithContact>> {
    let mut query_builder = sqlx::QueryBuilder::new(format!(
        "SELECT {DONOR_WITH_CONTACT_COLUMNS} \
         FROM donors d JOIN users u ON d.user_id = u.id WHERE u.is_active = TRUE"
    ));

    if let Some(blood_type) = &filter.blood_type {
        query_builder
            .push(" AND d.blood_type = ")
            .push_bind(blood_type);
    }
    if let Some(district) = &filter.district {
        query_builder.push(" AND d.district = ").push_bind(district);
    }
    if let Some(is_eligible) = filter.is_eligible {
        query_builder
            .push(" AND d.is_eligible = ")
            .push_bind(is_eligible);
    }

    query_builder.push(" ORDER BY d.created_at DESC");

    let donors = query_builder
        .build_query_as::<DonorWithContact>()
        .fetch_all(db)
        .await?;

    Ok(donors)
}

/// A donor's own profile, looked up through their user id.
#[tracing::instrument(skip(db))]
pub async fn get_donor_profile(
    db: &PgPool,
    user_id: i32,
) -> anyhow::Result<Option<DonorWithContact>> {
    let donor = sqlx::query_as::<_, DonorWithContact>(&format!(
        "SELECT {DONOR_WITH_CONTACT_COLUMNS} \
         FROM donors d JOIN users u ON d.user_id = u.id WHERE d.user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(donor)
}

/// The bare donor row for a user, without the joined contact fields.
#[tracing::instrument(skip(db))]
pub async fn get_donor_row(db: &PgPool, user_id: i32) -> anyhow::Result<Option<DonorRow>> {
    let donor = sqlx::query_as::<_, DonorRow>("SELECT * FROM donors WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    Ok(donor)
}

#[tracing::instrument(skip(db))]
pub async fn get_donor_id_by_user(db: &PgPool, user_id: i32) -> anyhow::Result<Option<i32>> {
    let donor_id: Option<i32> = sqlx::query_scalar("SELECT id FROM donors WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    Ok(donor_id)
}
