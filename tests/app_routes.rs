mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use snaplink::routes::router;

#[tokio::test]
async fn test_shorten_redirect_and_stats_flow() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "urls": [
                { "url": "https://example.com/landing", "custom_code": "launch" }
            ]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server.get("/launch").await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/landing");

    let json = server.get("/api/stats").await.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total_urls"], 1);
    assert_eq!(json["summary"]["total_clicks"], 1);
    assert_eq!(json["items"][0]["clicks"], 1);
}

#[tokio::test]
async fn test_static_routes_win_over_code_capture() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/not-found").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("404: Link Not Found"));

    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_code_lands_on_not_found_page() {
    let (state, _rx) = common::create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/nope42").await;
    response.assert_status(StatusCode::SEE_OTHER);

    let location = response.header("location");
    let page = server.get(location.to_str().unwrap()).await;
    page.assert_status(StatusCode::NOT_FOUND);
    assert!(page.text().contains("exist or has expired"));
}
