//! Session and wallet-linking routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use r3_api::app::create_app;

#[actix_web::test]
async fn test_establish_and_fetch_session() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({
                "user_id": "u-1",
                "email": "user@example.com",
                "display_name": "User",
                "provider": "apple"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["provider"], json!("apple"));
    assert_eq!(body["data"]["email_verified"], json!(false));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session/u-1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_session_is_not_found() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session/nobody")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_link_main_and_backup_wallets() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({
                "user_id": "u-1",
                "email": "user@example.com",
                "provider": "google"
            }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session/u-1/wallets")
            .set_json(json!({ "kind": "main", "address": common::WALLET }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["main_wallet"], json!(common::WALLET));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session/u-1/wallets")
            .set_json(json!({
                "kind": "backup",
                "address": "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae"
            }))
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["data"]["backup_wallet"].is_string());
}

#[actix_web::test]
async fn test_link_wallet_rejects_bad_address() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({
                "user_id": "u-1",
                "email": "user@example.com",
                "provider": "google"
            }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session/u-1/wallets")
            .set_json(json!({ "kind": "main", "address": "0x123" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_sign_out_removes_session() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session")
            .set_json(json!({
                "user_id": "u-1",
                "email": "user@example.com",
                "provider": "google"
            }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/session/u-1/sign-out")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session/u-1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
