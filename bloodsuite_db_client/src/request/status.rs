use models_bloodsuite::request::{BloodRequestRow, UpdateRequestStatusRequest};
use models_bloodsuite::RequestStatus;
use sqlx::PgPool;

/// Applies an already-validated status transition.
///
/// The update is pinned to the status the caller validated against, so a
/// concurrent transition turns this into a no-op (None) and the caller can
/// re-read instead of clobbering. Moving to fulfilled stamps `fulfilled_at`;
/// moving to approved records the approver. `units_fulfilled` changes only
/// when supplied.
#[tracing::instrument(skip(db, update), fields(status=%update.status))]
pub async fn update_request_status(
    db: &PgPool,
    request_id: i32,
    current: RequestStatus,
    update: &UpdateRequestStatusRequest,
    approver_id: i32,
) -> anyhow::Result<Option<BloodRequestRow>> {
    let mut query_builder = sqlx::QueryBuilder::new("UPDATE blood_requests SET status = ");
    query_builder.push_bind(update.status.as_str());
    query_builder.push(", updated_at = NOW()");

    if let Some(units_fulfilled) = update.units_fulfilled {
        query_builder
            .push(", units_fulfilled = ")
            .push_bind(units_fulfilled);
    }

    match update.status {
        RequestStatus::Fulfilled => {
            query_builder.push(", fulfilled_at = NOW()");
        }
        RequestStatus::Approved => {
            query_builder.push(", approved_by = ").push_bind(approver_id);
        }
        _ => {}
    }

    query_builder.push(" WHERE id = ").push_bind(request_id);
    query_builder
        .push(" AND status = ")
        .push_bind(current.as_str());
    query_builder.push(" RETURNING *");

    let request = query_builder
        .build_query_as::<BloodRequestRow>()
        .fetch_optional(db)
        .await?;

    Ok(request)
}
