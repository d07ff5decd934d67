#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use catalog_api_rust::config::AppConfig;

/// Router with development settings, independent of the test environment.
pub fn app() -> Router {
    catalog_api_rust::handlers::app(&AppConfig::development())
}

/// Sends one request through the default test router and decodes the JSON reply.
pub async fn send(method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    send_to(app(), method, uri, body).await
}

pub async fn send_to(router: Router, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = router.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let payload = serde_json::from_slice(&bytes)
        .with_context(|| format!("non-JSON response: {}", String::from_utf8_lossy(&bytes)))?;
    Ok((status, payload))
}

pub async fn get(uri: &str) -> Result<(StatusCode, Value)> {
    send(Method::GET, uri, None).await
}

pub async fn post(uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(Method::POST, uri, Some(body)).await
}

pub async fn patch(uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(Method::PATCH, uri, Some(body)).await
}
