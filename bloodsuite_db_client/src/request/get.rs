use models_bloodsuite::request::{BloodRequestRow, BloodRequestSummary, RequestFilter};
use sqlx::PgPool;

/// Lists requests most-urgent first, ANDing any supplied filters.
#[tracing::instrument(skip(db))]
pub async fn list_requests(
    db: &PgPool,
    filter: &RequestFilter,
) -> anyhow::Result<Vec<BloodRequestSummary>> {
    let mut query_builder = sqlx::QueryBuilder::new(
        "SELECT br.id, br.hospital_id, br.blood_type, br.units_needed, br.units_fulfilled, \
         br.urgency, br.status, br.patient_name, br.patient_condition, br.notes, \
         br.requested_by, br.approved_by, br.fulfilled_at, br.created_at, br.updated_at, \
         h.name AS hospital_name, \
         u.first_name || ' ' || u.last_name AS requested_by_name \
         FROM blood_requests br \
         JOIN hospitals h ON br.hospital_id = h.id \
         LEFT JOIN users u ON br.requested_by = u.id",
    );

    if filter.status.is_some() || filter.urgency.is_some() || filter.hospital_id.is_some() {
        query_builder.push(" WHERE ");
    }

    let mut first_condition = true;

    if let Some(status) = filter.status {
        query_builder.push("br.status = ").push_bind(status.as_str());
        first_condition = false;
    }
    if let Some(urgency) = filter.urgency {
        if !first_condition {
            query_builder.push(" AND ");
        }
        query_builder.push("br.urgency = ").push_bind(urgency.as_str());
        first_condition = false;
    }
    if let Some(hospital_id) = filter.hospital_id {
        if !first_condition {
            query_builder.push(" AND ");
        }
        query_builder.push("br.hospital_id = ").push_bind(hospital_id);
    }

    query_builder.push(
        " ORDER BY CASE br.urgency WHEN 'critical' THEN 1 WHEN 'urgent' THEN 2 ELSE 3 END, \
         br.created_at DESC",
    );

    let requests = query_builder
        .build_query_as::<BloodRequestSummary>()
        .fetch_all(db)
        .await?;

    Ok(requests)
}

#[tracing::instrument(skip(db))]
pub async fn get_request(db: &PgPool, request_id: i32) -> anyhow::Result<Option<BloodRequestRow>> {
    let request = sqlx::query_as::<_, BloodRequestRow>(
        "SELECT * FROM blood_requests WHERE id = $1",
    )
    .bind(request_id)
    .fetch_optional(db)
    .await?;

    Ok(request)
}
