use crate::common;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../bloodsuite_db_client/migrations")]
async fn test_register_donor_links_profile_and_token_works(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "password": "pw",
            "role": "donor",
            "bloodType": "O+",
            "district": "Maseru",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["role"], "donor");
    assert!(body["user"].get("password_hash").is_none());

    let user_id = body["user"]["id"].as_i64().unwrap() as i32;
    let blood_type: String =
        sqlx::query_scalar("SELECT blood_type FROM donors WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&pool)
            .await?;
    assert_eq!(blood_type, "O+");

    // the returned token is immediately usable
    let token = body["token"].as_str().unwrap();
    let me = server
        .get("/api/auth/me")
        .authorization_bearer(token)
        .await;
    me.assert_status_ok();

    let me_body: serde_json::Value = me.json();
    assert_eq!(me_body["email"], "a@x.com");
    assert_eq!(me_body["donor"]["blood_type"], "O+");
    assert_eq!(me_body["donor"]["district"], "Maseru");

    Ok(())
}

#[sqlx::test(migrations = "../bloodsuite_db_client/migrations")]
async fn test_duplicate_email_creates_no_row(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let body = common::donor_register_body("dup@x.com", "A+", "Berea");
    server
        .post("/api/auth/register")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let before: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await?;

    let response = server.post("/api/auth/register").json(&body).await;
    response.assert_status_bad_request();
    let error: serde_json::Value = response.json();
    assert_eq!(error["error"], "Email already registered");

    let after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await?;
    assert_eq!(before, after);

    Ok(())
}

#[sqlx::test(migrations = "../bloodsuite_db_client/migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    server
        .post("/api/auth/register")
        .json(&common::donor_register_body("known@x.com", "B+", "Leribe"))
        .await
        .assert_status(StatusCode::CREATED);

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({"email": "known@x.com", "password": "not-the-password"}))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({"email": "nobody@x.com", "password": "whatever"}))
        .await;

    wrong_password.assert_status_unauthorized();
    unknown_email.assert_status_unauthorized();

    // account existence must not leak through the body
    assert_eq!(wrong_password.text(), unknown_email.text());

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_inactive_account_cannot_login(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/auth/login")
        .json(&json!({"email": "oneg.inactive@bloodsuite.org", "password": "anything"}))
        .await;

    response.assert_status_unauthorized();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid credentials");

    Ok(())
}

#[sqlx::test(migrations = "../bloodsuite_db_client/migrations")]
async fn test_login_roundtrip(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    server
        .post("/api/auth/register")
        .json(&common::donor_register_body("round@x.com", "AB+", "Quthing"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/auth/login")
        .json(&json!({"email": "round@x.com", "password": "pw123456"}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["email"], "round@x.com");
    assert!(body["token"].as_str().is_some());

    Ok(())
}

#[sqlx::test(migrations = "../bloodsuite_db_client/migrations")]
async fn test_missing_fields_are_rejected(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/auth/register")
        .json(&json!({"email": "  ", "password": ""}))
        .await;

    response.assert_status_bad_request();

    Ok(())
}
