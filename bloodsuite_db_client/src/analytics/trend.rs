use models_bloodsuite::analytics::DonationsTrendRow;
use sqlx::PgPool;

/// Monthly donation counts and volume over the trailing window.
#[tracing::instrument(skip(db))]
pub async fn donations_trend(db: &PgPool, months: i32) -> anyhow::Result<Vec<DonationsTrendRow>> {
    let trend = sqlx::query_as::<_, DonationsTrendRow>(
        r#"
        SELECT DATE_TRUNC('month', donation_date) AS month,
               COUNT(*) AS donations,
               COALESCE(SUM(volume_ml), 0) AS total_volume
        FROM donations
        WHERE donation_date >= CURRENT_DATE - make_interval(months => $1)
        GROUP BY DATE_TRUNC('month', donation_date)
        ORDER BY month
        "#,
    )
    .bind(months)
    .fetch_all(db)
    .await?;

    Ok(trend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Pool, Postgres};

    #[sqlx::test(fixtures("../../fixtures/seed.sql"))]
    async fn test_trend_groups_by_month(pool: Pool<Postgres>) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO donations (donor_id, hospital_id, donation_date, volume_ml) VALUES \
             (1, 1, CURRENT_DATE - 3, 450), \
             (2, 1, CURRENT_DATE - 3, 500), \
             (1, 1, CURRENT_DATE - 200, 450)",
        )
        .execute(&pool)
        .await?;

        let trend = donations_trend(&pool, 6).await?;

        // the 200-day-old donation falls outside the window
        let total_donations: i64 = trend.iter().map(|row| row.donations).sum();
        assert_eq!(total_donations, 2);

        let this_month = trend.last().expect("current month bucket");
        assert_eq!(this_month.total_volume, 950);

        Ok(())
    }
}
