mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use catalog_api_rust::config::AppConfig;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let (status, body) = common::get("/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_lists_resources() -> Result<()> {
    let (status, body) = common::get("/").await?;
    assert_eq!(status, StatusCode::OK);
    let resources = body["data"]["resources"].as_array().cloned().unwrap_or_default();
    assert!(resources.contains(&json!("product")), "resources: {:?}", resources);
    Ok(())
}

#[tokio::test]
async fn meta_lists_registered_resources() -> Result<()> {
    let (status, body) = common::get("/api/meta").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["success"].as_bool().unwrap_or(false), "success=false: {}", body);

    let product = body["data"]
        .as_array()
        .and_then(|items| items.iter().find(|i| i["resource"] == "product"))
        .cloned()
        .unwrap_or_default();
    assert_eq!(product["table"], "products");
    Ok(())
}

#[tokio::test]
async fn meta_returns_capability_document() -> Result<()> {
    let (status, body) = common::get("/api/meta/product").await?;
    assert_eq!(status, StatusCode::OK);

    let price = &body["data"]["fields"]["price"];
    assert_eq!(price["type"], "number");
    assert_eq!(price["sortable"], true);
    assert!(!price["operators"].as_array().unwrap().contains(&json!("$contains")));
    assert!(body["data"]["fields"].get("slashed_price").is_some());
    Ok(())
}

#[tokio::test]
async fn unknown_resource_is_not_found() -> Result<()> {
    let (status, body) = common::get("/api/meta/widgets").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = common::post("/api/find/widgets", json!({})).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn find_compiles_filter() -> Result<()> {
    let (status, body) = common::post(
        "/api/find/product",
        json!({
            "select": ["name", "price"],
            "where": {"name": {"$starts_with": "Pan"}, "stock": {"$gt": 0}},
            "order": {"price": "asc"}
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);

    let query = body["data"]["query"].as_str().unwrap_or_default();
    assert!(query.starts_with("SELECT \"name\", \"price\" FROM \"products\""), "query: {}", query);
    assert!(query.contains("ORDER BY \"price\" ASC"), "query: {}", query);
    assert_eq!(body["data"]["params"], json!(["Pan%", 0]));
    assert!(body["data"]["count"]["query"].as_str().unwrap_or_default().starts_with("SELECT COUNT(*)"));
    Ok(())
}

#[tokio::test]
async fn find_rejects_contains_on_number() -> Result<()> {
    let (status, body) = common::post("/api/find/product", json!({"where": {"price": {"$contains": 5}}})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["reason"], "UNSUPPORTED_OPERATOR");
    assert!(body["field_errors"]["price"].is_string());
    Ok(())
}

#[tokio::test]
async fn find_rejects_unknown_field_and_bad_value() -> Result<()> {
    let (status, body) = common::post("/api/find/product", json!({"where": {"colour": "red"}})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "UNKNOWN_FIELD");

    let (status, body) = common::post("/api/find/product", json!({"where": {"stock": {"$in": ""}}})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "MALFORMED_VALUE");
    Ok(())
}

#[tokio::test]
async fn data_create_maps_to_columns() -> Result<()> {
    let (status, body) = common::post(
        "/api/data/product",
        json!({"name": "Wok", "price": "129.5", "shop_id": 3}),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"], json!({"name": "Wok", "price": 129.5, "shop_id": 3}));
    Ok(())
}

#[tokio::test]
async fn data_respects_create_and_edit_flags() -> Result<()> {
    // rating is visible but neither creatable nor editable
    let (status, body) = common::post("/api/data/product", json!({"rating": 5})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "FIELD_NOT_ALLOWED");

    let (status, _) = common::patch("/api/data/product", json!({"is_active": false})).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::post("/api/data/product", json!({"is_active": false})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn invalid_json_is_a_client_error() -> Result<()> {
    let (status, body) = common::post("/api/find/product", json!({"limit": "ten"})).await?;
    assert!(status.is_client_error(), "status: {}", status);
    assert_eq!(body["success"], false);
    Ok(())
}

#[tokio::test]
async fn find_uses_router_filter_config() -> Result<()> {
    let mut config = AppConfig::development();
    config.filter.max_limit = Some(5);
    config.filter.default_limit = Some(3);
    config.filter.list_delimiter = '|';
    let router = catalog_api_rust::handlers::app(&config);

    let (status, body) = common::send_to(
        router.clone(),
        Method::POST,
        "/api/find/product",
        Some(json!({"limit": 50})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    let query = body["data"]["query"].as_str().unwrap_or_default();
    assert!(query.ends_with("LIMIT 5"), "query: {}", query);

    let (_, body) = common::send_to(
        router,
        Method::POST,
        "/api/find/product",
        Some(json!({"where": {"status": {"$in": "draft|published"}}})),
    )
    .await?;
    let query = body["data"]["query"].as_str().unwrap_or_default();
    assert!(query.ends_with("LIMIT 3"), "query: {}", query);
    assert_eq!(body["data"]["params"], json!(["draft", "published"]));
    Ok(())
}

#[tokio::test]
async fn find_rejects_empty_operator_object() -> Result<()> {
    let (status, body) = common::post("/api/find/product", json!({"where": {"name": {}}})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "MALFORMED_VALUE");
    Ok(())
}
