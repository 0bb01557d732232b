use models_bloodsuite::donation::DonationWithHospital;
use sqlx::PgPool;

/// A donor's donation history, newest first.
#[tracing::instrument(skip(db))]
pub async fn donations_for_donor(
    db: &PgPool,
    donor_id: i32,
) -> anyhow::Result<Vec<DonationWithHospital>> {
    let donations = sqlx::query_as::<_, DonationWithHospital>(
        r#"
        SELECT d.id, d.donor_id, d.hospital_id, d.donation_date, d.volume_ml,
               d.notes, d.created_at, h.name AS hospital_name
        FROM donations d
        LEFT JOIN hospitals h ON d.hospital_id = h.id
        WHERE d.donor_id = $1
        ORDER BY d.donation_date DESC
        "#,
    )
    .bind(donor_id)
    .fetch_all(db)
    .await?;

    Ok(donations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Pool, Postgres};

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_history_is_newest_first(pool: Pool<Postgres>) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO donations (donor_id, hospital_id, donation_date) VALUES \
             (1, 1, CURRENT_DATE - 90), (1, NULL, CURRENT_DATE - 10)",
        )
        .execute(&pool)
        .await?;

        let history = donations_for_donor(&pool, 1).await?;

        assert_eq!(history.len(), 2);
        assert!(history[0].donation_date > history[1].donation_date);
        assert_eq!(history[0].hospital_name, None);
        assert_eq!(history[1].hospital_name.as_deref(), Some("Queen II Hospital"));

        Ok(())
    }
}
