mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use snaplink::api::handlers::{stats_handler, stats_list_handler};
use snaplink::domain::entities::ClickEvent;
use snaplink::domain::repositories::LinkRepository;
use snaplink::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/stats", get(stats_list_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn add_clicks(state: &AppState, code: &str, count: usize) {
    for _ in 0..count {
        state
            .link_repository
            .record_click(code, ClickEvent::new(Utc::now(), Some("Agent/1"), None))
            .await
            .unwrap();
    }
}

async fn seed(state: &AppState) {
    common::create_test_link(state, "docs01", "https://Example.com/Docs").await;
    common::create_test_link(state, "Promo", "https://shop.test/sale").await;
    common::create_expired_link(state, "old123", "https://example.org").await;

    add_clicks(state, "Promo", 2).await;
    add_clicks(state, "old123", 5).await;
}

#[tokio::test]
async fn test_stats_summary() {
    let (state, _rx) = common::create_test_state();
    seed(&state).await;
    let server = server(state);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total_urls"], 3);
    assert_eq!(json["summary"]["total_clicks"], 7);
    assert_eq!(json["summary"]["active_urls"], 2);
    assert_eq!(json["summary"]["expired_urls"], 1);
    assert_eq!(json["showing"], 3);

    let items = json["items"].as_array().unwrap();
    let codes: Vec<&str> = items.iter().map(|i| i["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["docs01", "Promo", "old123"]);
    assert_eq!(items[1]["clicks"], 2);
    assert_eq!(items[1]["status"], "active");
    assert_eq!(items[2]["status"], "expired");
    assert_eq!(items[2]["short_url"], format!("{}/old123", common::BASE_URL));
}

#[tokio::test]
async fn test_stats_empty_registry() {
    let (state, _rx) = common::create_test_state();
    let server = server(state);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total_urls"], 0);
    assert_eq!(json["summary"]["total_clicks"], 0);
    assert_eq!(json["showing"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_search_filters_items_only() {
    let (state, _rx) = common::create_test_state();
    seed(&state).await;
    let server = server(state);

    let response = server
        .get("/api/stats")
        .add_query_param("search", "EXAMPLE")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total_urls"], 3);
    assert_eq!(json["showing"], 2);

    let response = server
        .get("/api/stats")
        .add_query_param("search", "promo")
        .await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["showing"], 1);
    assert_eq!(json["items"][0]["code"], "Promo");
}

#[tokio::test]
async fn test_stats_detail_lists_clicks() {
    let (state, _rx) = common::create_test_state();
    seed(&state).await;
    let server = server(state);

    let response = server.get("/api/stats/Promo").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "Promo");
    assert_eq!(json["long_url"], "https://shop.test/sale");
    assert_eq!(json["status"], "active");
    assert_eq!(json["total"], 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["user_agent"], "Agent/1");
    assert_eq!(items[0]["referrer"], "direct");
}

#[tokio::test]
async fn test_stats_detail_reports_expired_link() {
    let (state, _rx) = common::create_test_state();
    seed(&state).await;
    let server = server(state);

    let response = server.get("/api/stats/old123").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "expired");
    assert_eq!(json["total"], 5);
}

#[tokio::test]
async fn test_stats_detail_not_found() {
    let (state, _rx) = common::create_test_state();
    let server = server(state);

    let response = server.get("/api/stats/missing").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "missing");
}

#[tokio::test]
async fn test_stats_is_read_only() {
    let (state, _rx) = common::create_test_state();
    let created = Utc::now() - Duration::minutes(5);
    state
        .link_repository
        .add_many(vec![common::test_record(
            "stable",
            "https://example.com",
            created,
            Duration::minutes(30),
        )])
        .await
        .unwrap();
    let before = state.link_repository.list().await.unwrap();
    let server = server(state.clone());

    server.get("/api/stats").await.assert_status_ok();
    server.get("/api/stats/stable").await.assert_status_ok();

    assert_eq!(state.link_repository.list().await.unwrap(), before);
}
