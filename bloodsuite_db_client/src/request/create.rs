use models_bloodsuite::notification::{notification_types, priorities};
use models_bloodsuite::request::{BloodRequestRow, CreateBloodRequestRequest};
use models_bloodsuite::Urgency;
use sqlx::PgPool;

/// Inserts a blood request and, for urgent or critical urgency, notifies
/// every eligible donor with a matching blood type on an active account.
///
/// The request insert and the notification fan-out commit in a single
/// transaction: a failed fan-out leaves no request behind. Returns the
/// created request and how many donors were notified.
#[tracing::instrument(
    skip(db, request),
    fields(hospital_id=%request.hospital_id, blood_type=%request.blood_type)
)]
pub async fn create_request_with_fanout(
    db: &PgPool,
    requested_by: i32,
    request: &CreateBloodRequestRequest,
) -> anyhow::Result<(BloodRequestRow, usize)> {
    let urgency = request.urgency.unwrap_or(Urgency::Normal);

    let mut transaction = db.begin().await?;

    let created = sqlx::query_as::<_, BloodRequestRow>(
        r#"
        INSERT INTO blood_requests
            (hospital_id, blood_type, units_needed, urgency, patient_name,
             patient_condition, notes, requested_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(request.hospital_id)
    .bind(request.blood_type.as_str())
    .bind(request.units_needed)
    .bind(urgency.as_str())
    .bind(&request.patient_name)
    .bind(&request.patient_condition)
    .bind(&request.notes)
    .bind(requested_by)
    .fetch_one(transaction.as_mut())
    .await?;

    let mut notified = 0;
    if urgency.notifies_donors() {
        let donor_user_ids: Vec<i32> = sqlx::query_scalar(
            r#"
            SELECT u.id
            FROM donors d
            JOIN users u ON d.user_id = u.id
            WHERE d.blood_type = $1 AND d.is_eligible = TRUE AND u.is_active = TRUE
            "#,
        )
        .bind(request.blood_type.as_str())
        .fetch_all(transaction.as_mut())
        .await?;

        notified = donor_user_ids.len();
        if notified > 0 {
            let message = format!(
                "Urgent need for {} blood type. Please donate if you can.",
                request.blood_type
            );
            sqlx::query(
                r#"
                INSERT INTO notifications (user_id, type, title, message, priority, related_request_id)
                SELECT user_id, $2, $3, $4, $5, $6
                FROM UNNEST($1::int4[]) AS user_id
                "#,
            )
            .bind(&donor_user_ids)
            .bind(notification_types::URGENT_REQUEST)
            .bind("Urgent Blood Request")
            .bind(&message)
            .bind(priorities::HIGH)
            .bind(created.id)
            .execute(transaction.as_mut())
            .await?;
        }
    }

    transaction.commit().await?;

    tracing::info!(request_id=%created.id, notified, "created blood request");

    Ok((created, notified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_bloodsuite::BloodType;
    use sqlx::{Pool, Postgres};

    fn oneg_request(urgency: Option<Urgency>) -> CreateBloodRequestRequest {
        CreateBloodRequestRequest {
            hospital_id: 1,
            blood_type: BloodType::ONegative,
            units_needed: 3,
            urgency,
            patient_name: Some("M. Patient".to_string()),
            patient_condition: None,
            notes: None,
        }
    }

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_critical_request_notifies_each_eligible_donor(
        pool: Pool<Postgres>,
    ) -> anyhow::Result<()> {
        // seeded O- donors: two eligible on active accounts, one ineligible,
        // one eligible on a deactivated account
        let (created, notified) =
            create_request_with_fanout(&pool, 6, &oneg_request(Some(Urgency::Critical))).await?;

        assert_eq!(created.status, "pending");
        assert_eq!(created.urgency, "critical");
        assert_eq!(notified, 2);

        let rows: Vec<(i32, String)> = sqlx::query_as(
            "SELECT user_id, message FROM notifications WHERE related_request_id = $1 ORDER BY user_id",
        )
        .bind(created.id)
        .fetch_all(&pool)
        .await?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 2);
        assert_eq!(rows[1].0, 3);
        assert!(rows[0].1.contains("O-"));

        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_normal_request_notifies_nobody(pool: Pool<Postgres>) -> anyhow::Result<()> {
        let (created, notified) =
            create_request_with_fanout(&pool, 6, &oneg_request(None)).await?;

        assert_eq!(created.urgency, "normal");
        assert_eq!(notified, 0);

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE related_request_id = $1")
                .bind(created.id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(count, 0);

        Ok(())
    }

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_urgent_request_with_no_matching_donors(
        pool: Pool<Postgres>,
    ) -> anyhow::Result<()> {
        let request = CreateBloodRequestRequest {
            blood_type: BloodType::AbPositive,
            ..oneg_request(Some(Urgency::Urgent))
        };

        let (_, notified) = create_request_with_fanout(&pool, 6, &request).await?;
        assert_eq!(notified, 0);

        Ok(())
    }
}
