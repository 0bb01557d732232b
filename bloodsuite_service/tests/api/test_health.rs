use crate::common;
use axum_test::TestServer;
use bloodsuite_service::api::health::HealthResponse;
use models_bloodsuite::{paths, Role};

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::new(common::create_test_app_without_db()).unwrap();

    let response = server.get(paths::HEALTH).await;
    response.assert_status_ok();

    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "bloodsuite");
    assert!(body.timestamp.timestamp() > 0);
}

#[tokio::test]
async fn test_districts_are_static_and_open() {
    let server = TestServer::new(common::create_test_app_without_db()).unwrap();

    let response = server.get(paths::DISTRICTS).await;
    response.assert_status_ok();

    let districts: Vec<String> = response.json();
    assert_eq!(districts.len(), 10);
    assert!(districts.contains(&"Maseru".to_string()));
    assert!(districts.contains(&"Qacha's Nek".to_string()));
}

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    // the jwt gate rejects before any handler runs, so no database is needed
    let server = TestServer::new(common::create_test_app_without_db()).unwrap();

    let response = server.get(paths::DONORS).await;
    response.assert_status_unauthorized();

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Access token required");
}

#[tokio::test]
async fn test_wrong_role_is_forbidden_before_any_query() {
    let server = TestServer::new(common::create_test_app_without_db()).unwrap();
    let donor_token = common::token_for(2, "donor@bloodsuite.org", Role::Donor);

    let response = server
        .get(paths::DONORS)
        .authorization_bearer(&donor_token)
        .await;

    response.assert_status_forbidden();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Insufficient permissions");
}
