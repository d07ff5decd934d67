use axum::extract::Path;
use serde::Serialize;

use super::resolve_schema;
use crate::introspect::Schema;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct ResourceSummary {
    pub resource: String,
    pub table: String,
    pub fields: usize,
    pub filterable: usize,
    pub sortable: usize,
}

/// GET /api/meta - registered resources
pub async fn list() -> ApiResult<Vec<ResourceSummary>> {
    let summaries = crate::models::registry()
        .iter()
        .map(|(resource, schema)| ResourceSummary {
            resource: resource.to_string(),
            table: schema.table.clone(),
            fields: schema.len(),
            filterable: schema.filterable().count(),
            sortable: schema.sortable().count(),
        })
        .collect();
    Ok(ApiResponse::success(summaries))
}

/// GET /api/meta/:resource - capability document for one resource
pub async fn get(Path(resource): Path<String>) -> ApiResult<&'static Schema> {
    let schema = resolve_schema(&resource)?;
    Ok(ApiResponse::success(schema))
}
