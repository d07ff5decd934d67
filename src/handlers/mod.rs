// HTTP surface over the schema registry and the filter compiler.
//
// Route Prefix: /api/meta (capability documents), /api/find (list query
// compilation), /api/data (write body validation)

pub mod data;
pub mod find;
pub mod meta;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::error::ApiError;
use crate::introspect::Schema;

/// Configuration shared with handlers as router state.
pub type SharedConfig = Arc<AppConfig>;

/// Router using the process-wide configuration.
pub fn router() -> Router {
    app(crate::config::config())
}

/// Router whose handlers read filter limits from `config`.
pub fn app(config: &AppConfig) -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(meta_routes())
        .merge(find_routes())
        .merge(data_routes())
        .with_state(Arc::new(config.clone()));

    if config.security.enable_cors {
        app = app.layer(cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }
    app
}

fn meta_routes() -> Router<SharedConfig> {
    Router::new()
        .route("/api/meta", get(meta::list))
        .route("/api/meta/:resource", get(meta::get))
}

fn find_routes() -> Router<SharedConfig> {
    Router::new().route("/api/find/:resource", post(find::post))
}

fn data_routes() -> Router<SharedConfig> {
    Router::new().route("/api/data/:resource", post(data::post).patch(data::patch))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Looks up a registered resource, 404 when unknown.
pub(crate) fn resolve_schema(resource: &str) -> Result<&'static Schema, ApiError> {
    crate::models::registry()
        .get(resource)
        .ok_or_else(|| ApiError::unknown_resource(resource))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Catalog API (Rust)",
            "version": version,
            "description": "Schema introspection and validated list filters for catalog records",
            "endpoints": {
                "home": "/",
                "health": "/health",
                "meta": "/api/meta[/:resource]",
                "find": "/api/find/:resource",
                "data": "/api/data/:resource",
            },
            "resources": crate::models::registry().resources().collect::<Vec<_>>(),
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "resources": crate::models::registry().len(),
        }
    }))
}
