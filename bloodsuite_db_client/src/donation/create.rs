use crate::inventory::create::DEFAULT_UNIT_VOLUME_ML;
use models_bloodsuite::donation::{CreateDonationRequest, DonationRow};
use sqlx::PgPool;

/// Records a donation and advances the donor's last-donation date, in one
/// transaction. Returns None when the donor does not exist.
#[tracing::instrument(skip(db, request), fields(donor_id=%request.donor_id))]
pub async fn create_donation(
    db: &PgPool,
    request: &CreateDonationRequest,
) -> anyhow::Result<Option<DonationRow>> {
    let mut transaction = db.begin().await?;

    let donor_id: Option<i32> = sqlx::query_scalar("SELECT id FROM donors WHERE id = $1")
        .bind(request.donor_id)
        .fetch_optional(transaction.as_mut())
        .await?;

    if donor_id.is_none() {
        return Ok(None);
    }

    let donation = sqlx::query_as::<_, DonationRow>(
        r#"
        INSERT INTO donations (donor_id, hospital_id, donation_date, volume_ml, notes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(request.donor_id)
    .bind(request.hospital_id)
    .bind(request.donation_date)
    .bind(request.volume_ml.unwrap_or(DEFAULT_UNIT_VOLUME_ML))
    .bind(&request.notes)
    .fetch_one(transaction.as_mut())
    .await?;

    sqlx::query(
        r#"
        UPDATE donors
        SET last_donation_date = GREATEST(COALESCE(last_donation_date, $2), $2),
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(request.donor_id)
    .bind(request.donation_date)
    .execute(transaction.as_mut())
    .await?;

    transaction.commit().await?;

    Ok(Some(donation))
}
