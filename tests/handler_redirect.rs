mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    common::create_test_link(&state, "rust", "https://www.rust-lang.org/");
    let server = common::create_test_server(state);

    let response = server.get("/shortlinks/rust").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://www.rust-lang.org/");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/shortlinks/nowhere").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
