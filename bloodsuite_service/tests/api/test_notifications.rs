use crate::common;
use axum_test::TestServer;
use models_bloodsuite::{paths, Role};
use sqlx::PgPool;

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_notifications_are_scoped_to_caller(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let donor_token = common::token_for(2, "oneg.one@bloodsuite.org", Role::Donor);
    let admin_token = common::token_for(1, "admin@bloodsuite.org", Role::Admin);

    let mine = server
        .get(paths::NOTIFICATIONS)
        .authorization_bearer(&donor_token)
        .await;
    mine.assert_status_ok();
    let mine: serde_json::Value = mine.json();
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["type"], "urgent_request");

    let theirs = server
        .get(paths::NOTIFICATIONS)
        .authorization_bearer(&admin_token)
        .await;
    theirs.assert_status_ok();
    let theirs: serde_json::Value = theirs.json();
    assert!(theirs.as_array().unwrap().is_empty());

    // marking another user's notification is indistinguishable from a missing one
    let stolen = server
        .put("/api/notifications/1/read")
        .authorization_bearer(&admin_token)
        .await;
    stolen.assert_status_not_found();

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_read_flow(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let donor_token = common::token_for(2, "oneg.one@bloodsuite.org", Role::Donor);

    let count = server
        .get("/api/notifications/unread-count")
        .authorization_bearer(&donor_token)
        .await;
    count.assert_status_ok();
    let count: serde_json::Value = count.json();
    assert_eq!(count["count"], 1);

    let read = server
        .put("/api/notifications/1/read")
        .authorization_bearer(&donor_token)
        .await;
    read.assert_status_ok();
    let read: serde_json::Value = read.json();
    assert_eq!(read["is_read"], true);

    let count = server
        .get("/api/notifications/unread-count")
        .authorization_bearer(&donor_token)
        .await;
    let count: serde_json::Value = count.json();
    assert_eq!(count["count"], 0);

    let unread_only = server
        .get(paths::NOTIFICATIONS)
        .add_query_param("unreadOnly", "true")
        .authorization_bearer(&donor_token)
        .await;
    let unread_only: serde_json::Value = unread_only.json();
    assert!(unread_only.as_array().unwrap().is_empty());

    Ok(())
}

#[sqlx::test(
    migrations = "../bloodsuite_db_client/migrations",
    fixtures(path = "../../../bloodsuite_db_client/fixtures", scripts("seed"))
)]
async fn test_mark_all_read(pool: PgPool) -> anyhow::Result<()> {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();
    let donor_token = common::token_for(3, "oneg.two@bloodsuite.org", Role::Donor);

    let response = server
        .put("/api/notifications/mark-all-read")
        .authorization_bearer(&donor_token)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "All notifications marked as read");

    let count = server
        .get("/api/notifications/unread-count")
        .authorization_bearer(&donor_token)
        .await;
    let count: serde_json::Value = count.json();
    assert_eq!(count["count"], 0);

    Ok(())
}
