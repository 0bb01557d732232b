use crate::common;
use axum::http::StatusCode;
use axum_test::TestServer;
use models_bloodsuite::{paths, Role};
use serde_json::json;
use sqlx::PgPool;

fn critical_oneg_request() -> serde_json::Value {
    json!({
        "hospitalId": 1,
        "bloodType": "O-",
        "unitsNeeded": 3,
        "urgency": "critical",
        "patientName": "M. Patient",
    })
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_donor_role_cannot_create_requests(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();
    let donor_token = common::token_for(2, "oneg.one@bloodsuite.org", Role::Donor);

    let before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests")
        .fetch_one(&pool)
        .await?;

    let response = server
        .post(paths::REQUESTS)
        .authorization_bearer(&donor_token)
        .json(&critical_oneg_request())
        .await;

    response.assert_status_forbidden();

    let after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blood_requests")
        .fetch_one(&pool)
        .await?;
    assert_eq!(before, after);

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_critical_request_notifies_matching_donors(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();
    let staff_token = common::token_for(6, "queen2@bloodsuite.org", Role::Hospital);

    let response = server
        .post(paths::REQUESTS)
        .authorization_bearer(&staff_token)
        .json(&critical_oneg_request())
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "pending");
    assert_eq!(body["urgency"], "critical");
    assert_eq!(body["requested_by"], 6);

    // the two eligible O- donors on active accounts, and nobody else
    let request_id = body["id"].as_i64().unwrap() as i32;
    let notified: Vec<i32> = sqlx::query_scalar(
        "SELECT user_id FROM notifications WHERE related_request_id = $1 ORDER BY user_id",
    )
    .bind(request_id)
    .fetch_all(&pool)
    .await?;
    assert_eq!(notified, vec![2, 3]);

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_illegal_transition_is_rejected(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();
    let staff_token = common::token_for(6, "queen2@bloodsuite.org", Role::Hospital);

    // the seeded request is pending; fulfilling it outright skips approval
    let response = server
        .put("/api/requests/1/status")
        .authorization_bearer(&staff_token)
        .json(&json!({"status": "fulfilled"}))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["error"],
        "Cannot change request status from pending to fulfilled"
    );

    let status: String = sqlx::query_scalar("SELECT status FROM blood_requests WHERE id = 1")
        .fetch_one(&pool)
        .await?;
    assert_eq!(status, "pending");

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_full_status_lifecycle(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let staff_token = common::token_for(6, "queen2@bloodsuite.org", Role::Hospital);

    let approved = server
        .put("/api/requests/1/status")
        .authorization_bearer(&staff_token)
        .json(&json!({"status": "approved"}))
        .await;
    approved.assert_status_ok();
    let approved: serde_json::Value = approved.json();
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["approved_by"], 6);

    // fulfilling without unitsFulfilled stamps the timestamp and leaves units alone
    let fulfilled = server
        .put("/api/requests/1/status")
        .authorization_bearer(&staff_token)
        .json(&json!({"status": "fulfilled"}))
        .await;
    fulfilled.assert_status_ok();
    let fulfilled: serde_json::Value = fulfilled.json();
    assert_eq!(fulfilled["status"], "fulfilled");
    assert!(fulfilled["fulfilled_at"].is_string());
    assert_eq!(fulfilled["units_fulfilled"], 0);

    // the request is terminal now
    let reopened = server
        .put("/api/requests/1/status")
        .authorization_bearer(&staff_token)
        .json(&json!({"status": "pending"}))
        .await;
    reopened.assert_status_bad_request();

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_unknown_request_is_not_found(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let staff_token = common::token_for(6, "queen2@bloodsuite.org", Role::Hospital);

    let response = server
        .put("/api/requests/999/status")
        .authorization_bearer(&staff_token)
        .json(&json!({"status": "approved"}))
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Request not found");

    Ok(())
}
