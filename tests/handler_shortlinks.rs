mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_with_generated_code() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/shortlinks")
        .json(&json!({ "original_url": "https://example.com/docs" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert_eq!(json["original_url"], "https://example.com/docs");
    assert_eq!(
        json["short_url"],
        format!("{}/shortlinks/{}", common::BASE_URL, id)
    );
    assert!(json["created_at"].is_string());
    assert_eq!(state.link_count(), 1);
}

#[tokio::test]
async fn test_create_with_custom_slug() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shortlinks")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_slug": "Spring Promo!"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "spring-promo");
}

#[tokio::test]
async fn test_create_invalid_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shortlinks")
        .json(&json!({ "original_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_prohibited_slug() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/api/shortlinks")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_slug": "r00t-access"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "\"r00t-access\" contains prohibited content"
    );
    assert!(json["error"]["details"].get("suggestions").is_none());
}

#[tokio::test]
async fn test_create_taken_slug_conflict() {
    let state = common::create_test_state();
    common::create_test_link(&state, "promo", "https://first.com");
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shortlinks")
        .json(&json!({
            "original_url": "https://second.com",
            "custom_slug": "promo"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "\"promo\" is already taken");

    let suggestions = json["error"]["details"]["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 5);
    assert!(suggestions.iter().all(|s| s != "promo"));
}

#[tokio::test]
async fn test_get_short_link() {
    let state = common::create_test_state();
    common::create_test_link(&state, "docs", "https://docs.rs/");
    let server = common::create_test_server(state);

    let response = server.get("/api/shortlinks/docs").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "docs");
    assert_eq!(json["original_url"], "https://docs.rs/");
}

#[tokio::test]
async fn test_get_missing_short_link() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/shortlinks/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_list_short_links() {
    let state = common::create_test_state();
    common::create_test_link(&state, "alpha", "https://a.com/");
    common::create_test_link(&state, "bravo", "https://b.com/");
    let server = common::create_test_server(state);

    let response = server.get("/api/shortlinks").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let mut ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    ids.sort();
    assert_eq!(ids, ["alpha", "bravo"]);
}

#[tokio::test]
async fn test_create_with_long_custom_slug() {
    let server = common::create_test_server(common::create_test_state());
    let long_slug = "chapter-".repeat(20);

    let response = server
        .post("/api/shortlinks")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_slug": long_slug
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], long_slug.trim_end_matches('-'));
}
