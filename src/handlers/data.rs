use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, extract::Path, Json};
use serde_json::Value;

use super::resolve_schema;
use crate::filter::{validate_write, WriteMode};
use crate::middleware::{ApiResponse, ApiResult};

/// POST /api/data/:resource - validate a create body
///
/// Every key must be creatable. Returns the body keyed by store column.
pub async fn post(
    Path(resource): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<BTreeMap<String, Value>> {
    write(&resource, payload, WriteMode::Create)
}

/// PATCH /api/data/:resource - validate an update body
pub async fn patch(
    Path(resource): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<BTreeMap<String, Value>> {
    write(&resource, payload, WriteMode::Update)
}

fn write(
    resource: &str,
    payload: Result<Json<Value>, JsonRejection>,
    mode: WriteMode,
) -> ApiResult<BTreeMap<String, Value>> {
    let schema = resolve_schema(resource)?;
    let Json(body) = payload?;
    let columns = validate_write(schema, &body, mode)?;
    Ok(ApiResponse::success(columns))
}
