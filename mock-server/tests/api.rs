use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, QueryResponse};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn query_returns_echo() {
    let resp = app()
        .oneshot(json_request("POST", "/query", r#"{"query":"hello"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: QueryResponse = body_json(resp).await;
    assert_eq!(body.response, "You asked: hello");
}

#[tokio::test]
async fn query_accepts_empty_string() {
    let resp = app()
        .oneshot(json_request("POST", "/query", r#"{"query":""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: QueryResponse = body_json(resp).await;
    assert_eq!(body.response, "You asked: ");
}

#[tokio::test]
async fn query_uses_custom_responder() {
    let app = app_with(Arc::new(|q: &str| q.to_uppercase()));
    let resp = app
        .oneshot(json_request("POST", "/query", r#"{"query":"shout"}"#))
        .await
        .unwrap();

    let body: QueryResponse = body_json(resp).await;
    assert_eq!(body.response, "SHOUT");
}

#[tokio::test]
async fn query_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/query", r#"{"not_query":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn query_invalid_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/query", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn query_without_content_type_returns_415() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/query")
                .body(r#"{"query":"x"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn get_query_is_not_allowed() {
    let resp = app()
        .oneshot(Request::builder().uri("/query").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app()
        .oneshot(json_request("POST", "/ask", r#"{"query":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
