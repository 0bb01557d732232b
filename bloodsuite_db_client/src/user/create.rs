use models_bloodsuite::user::User;
use sqlx::PgPool;

/// Fields for a new `users` row. The password arrives already hashed.
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

/// Donor profile created alongside a donor-role registration.
#[derive(Debug)]
pub struct NewDonorProfile {
    pub blood_type: String,
    pub district: Option<String>,
}

/// Checks whether an email is already registered.
#[tracing::instrument(skip(db))]
pub async fn email_exists(db: &PgPool, email: &str) -> anyhow::Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(db)
        .await?;

    Ok(exists)
}

/// Creates a user and, for donor registrations, the linked donor row.
/// Both inserts commit in one transaction.
#[tracing::instrument(skip(db, user, donor), fields(email=%user.email, role=%user.role))]
pub async fn create_user_with_donor(
    db: &PgPool,
    user: NewUser,
    donor: Option<NewDonorProfile>,
) -> anyhow::Result<User> {
    let mut transaction = db.begin().await?;

    let created = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, role, first_name, last_name, phone)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.role)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.phone)
    .fetch_one(transaction.as_mut())
    .await?;

    if let Some(donor) = donor {
        sqlx::query(
            r#"
            INSERT INTO donors (user_id, blood_type, district)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(created.id)
        .bind(&donor.blood_type)
        .bind(&donor.district)
        .execute(transaction.as_mut())
        .await?;
    }

    transaction.commit().await?;

    Ok(created)
}
