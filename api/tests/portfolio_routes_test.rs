//! Portfolio pass-through routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use r3_api::app::create_app;

#[actix_web::test]
async fn test_overview_aggregates_provider_data() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let uri = format!("/api/v1/portfolio/overview?address={}", common::WALLET);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["address"], json!(common::WALLET));
    assert_eq!(data["total_balance"]["total_usd_value"], json!(1_250_000.0));
    assert_eq!(data["errors"], json!([]));
}

#[actix_web::test]
async fn test_overview_rejects_bad_address() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/portfolio/overview?address=0x123")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_airdrops_endpoint() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let uri = format!("/api/v1/portfolio/airdrops?address={}", common::WALLET);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["data"].is_array());
}

#[actix_web::test]
async fn test_defi_details_passthrough() {
    let (state, _, _) = common::test_state();
    let app = test::init_service(create_app(state)).await;

    let uri = format!(
        "/api/v1/portfolio/defi-details?address={}&protocol_id=aave",
        common::WALLET
    );
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["protocol_id"], json!("aave"));
}
