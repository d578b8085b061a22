use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use readable::config::Config;
use readable::routes;
use readable::state::AppState;

pub fn test_app() -> Router {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> Router {
    routes::app(AppState::new(config))
}

/// Send one request through the router and decode the JSON response.
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub fn post_body(id: &str, category: &str) -> Value {
    serde_json::json!({
        "id": id,
        "timestamp": 1467166872634i64,
        "title": "Udacity is the best place to learn React",
        "body": "Everyone says so after all.",
        "author": "thingtwo",
        "category": category,
    })
}

pub fn comment_body(id: &str, parent_id: &str) -> Value {
    serde_json::json!({
        "id": id,
        "timestamp": 1468166872634i64,
        "body": "Hi there! I am a COMMENT.",
        "author": "thingtwo",
        "parentId": parent_id,
    })
}
