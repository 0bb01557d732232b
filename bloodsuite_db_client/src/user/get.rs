use models_bloodsuite::user::User;
use sqlx::PgPool;

/// Looks up an active account for login. Inactive accounts are invisible
/// here so they cannot authenticate.
#[tracing::instrument(skip(db))]
pub async fn get_active_user_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE email = $1 AND is_active = TRUE",
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

#[tracing::instrument(skip(db))]
pub async fn get_user_by_id(db: &PgPool, user_id: i32) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    Ok(user)
}
