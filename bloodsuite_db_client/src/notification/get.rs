use models_bloodsuite::notification::NotificationRow;
use sqlx::PgPool;

/// Newest notifications are capped so the bell menu stays bounded.
const NOTIFICATION_PAGE_LIMIT: i64 = 50;

/// A user's notifications, newest first.
#[tracing::instrument(skip(db))]
pub async fn list_notifications(
    db: &PgPool,
    user_id: i32,
    unread_only: bool,
) -> anyhow::Result<Vec<NotificationRow>> {
    let mut query_builder =
        sqlx::QueryBuilder::new("SELECT * FROM notifications WHERE user_id = ");
    query_builder.push_bind(user_id);

    if unread_only {
        query_builder.push(" AND is_read = FALSE");
    }

    query_builder.push(" ORDER BY created_at DESC LIMIT ");
    query_builder.push_bind(NOTIFICATION_PAGE_LIMIT);

    let notifications = query_builder
        .build_query_as::<NotificationRow>()
        .fetch_all(db)
        .await?;

    Ok(notifications)
}

#[tracing::instrument(skip(db))]
pub async fn unread_count(db: &PgPool, user_id: i32) -> anyhow::Result<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;

    Ok(count)
}
