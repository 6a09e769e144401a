mod common;

use actix_web::{http::StatusCode, test, HttpMessage};
use chrono::Duration;
use common::{client::TestClient, TestContext, TEST_EXPIRATION_DAYS};
use entity::scrum_scrum_user_token::Client;
use serde_json::json;

fn patch_name(user_id: uuid::Uuid, key: &str) -> test::TestRequest {
    test::TestRequest::patch()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {key}")))
        .set_json(json!({ "name": "Renamed" }))
}

#[actix_web::test]
async fn test_expired_web_token_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("margaret").await.expect("create user");

    let token = client.issue_token(&user, Client::Web).await;
    let token = client
        .age_token(token, Duration::days(TEST_EXPIRATION_DAYS) + Duration::hours(1))
        .await;

    let resp = test::call_service(&app, patch_name(user.id, &token.key).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Token has expired.");

    // the rejected request changed nothing
    let unchanged = ctx.db.get_user_by_id(&user.id).await.unwrap();
    assert_eq!(unchanged.name, "Test User");
}

#[actix_web::test]
async fn test_web_token_inside_window_is_accepted() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("frances").await.expect("create user");

    let token = client.issue_token(&user, Client::Web).await;
    let token = client
        .age_token(token, Duration::days(TEST_EXPIRATION_DAYS) - Duration::hours(1))
        .await;

    let resp = test::call_service(&app, patch_name(user.id, &token.key).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_mobile_token_never_expires() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("katherine").await.expect("create user");

    let token = client.issue_token(&user, Client::Mobile).await;
    let token = client.age_token(token, Duration::days(3650)).await;

    let resp = test::call_service(&app, patch_name(user.id, &token.key).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Renamed");
}

#[actix_web::test]
async fn test_unknown_token_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("alan").await.expect("create user");

    let resp = test::call_service(&app, patch_name(user.id, "tok_not-a-real-token").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token.");
}

#[actix_web::test]
async fn test_missing_authorization_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("edsger").await.expect("create user");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/users/{}", user.id))
        .set_json(json!({ "name": "Anonymous" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_client_header_on_authenticated_request() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("hedy").await.expect("create user");
    let token = client.issue_token(&user, Client::Mobile).await;

    let req = patch_name(user.id, &token.key)
        .insert_header(("Client", "smart-fridge"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("smart-fridge"));
}

#[actix_web::test]
async fn test_authenticated_request_without_client_header() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("john").await.expect("create user");
    let token = client.issue_token(&user, Client::Web).await;

    let req = patch_name(user.id, &token.key).to_request();
    assert!(!req.headers().contains_key("Client"));
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_mobile_client_header_does_not_extend_web_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("donald").await.expect("create user");

    let token = client.issue_token(&user, Client::Web).await;
    let token = client
        .age_token(token, Duration::days(TEST_EXPIRATION_DAYS) + Duration::hours(1))
        .await;

    // expiry follows the stored token, not the header
    let req = patch_name(user.id, &token.key)
        .insert_header(("Client", "mobile"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token has expired.");
}

#[actix_web::test]
async fn test_inactive_user_token_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("ken").await.expect("create user");
    let token = client.issue_token(&user, Client::Mobile).await;
    client.deactivate(&user).await;

    let resp = test::call_service(&app, patch_name(user.id, &token.key).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User inactive or deleted.");
}

#[actix_web::test]
async fn test_expired_token_on_retrieve_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("linus").await.expect("create user");

    let token = client.issue_token(&user, Client::Web).await;
    let token = client.age_token(token, Duration::days(30)).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", user.id))
        .insert_header(("Authorization", format!("Bearer {}", token.key)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token has expired.");
}

#[actix_web::test]
async fn test_unknown_client_header_on_list_with_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    let user = client.create_test_user("bjarne").await.expect("create user");
    let token = client.issue_token(&user, Client::Web).await;

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {}", token.key)))
        .insert_header(("Client", "toaster"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("toaster"));
}

#[actix_web::test]
async fn test_presented_token_is_checked_on_anonymous_routes() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.config.clone());
    let app = test::init_service(client.create_app()).await;
    client.create_test_user("guido").await.expect("create user");

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("Authorization", "Bearer garbage"))
        .set_json(common::test_data::sample_user("yukihiro"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(!ctx.db.user_exists_by_username("yukihiro").await.unwrap());

    // no header, no authentication
    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
