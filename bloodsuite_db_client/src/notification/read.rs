use models_bloodsuite::notification::NotificationRow;
use sqlx::PgPool;

/// Marks one notification read. Scoped to the owner: another user's id
/// behaves as not-found.
#[tracing::instrument(skip(db))]
pub async fn mark_read(
    db: &PgPool,
    notification_id: i32,
    user_id: i32,
) -> anyhow::Result<Option<NotificationRow>> {
    let notification = sqlx::query_as::<_, NotificationRow>(
        r#"
        UPDATE notifications SET is_read = TRUE
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(notification_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(notification)
}

/// Marks everything unread as read for one user; returns how many rows moved.
#[tracing::instrument(skip(db))]
pub async fn mark_all_read(db: &PgPool, user_id: i32) -> anyhow::Result<u64> {
    let result = sqlx::query(
        "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}
