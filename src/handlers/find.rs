use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;

use super::{resolve_schema, SharedConfig};
use crate::filter::{Filter, FilterData, SqlResult};
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Serialize)]
pub struct CompiledFind {
    #[serde(flatten)]
    pub select: SqlResult,
    pub count: SqlResult,
}

/// POST /api/find/:resource - validate a FilterData body and compile it
///
/// Accepts:
/// - select: keys to return (must be visible)
/// - where: filter conditions
/// - order: sort order (sortable keys only)
/// - limit/offset: pagination
/// - include_deleted: keep soft-deleted rows
pub async fn post(
    Path(resource): Path<String>,
    State(config): State<SharedConfig>,
    payload: Result<Json<FilterData>, JsonRejection>,
) -> ApiResult<CompiledFind> {
    let schema = resolve_schema(&resource)?;
    let Json(filter_data) = payload?;

    let mut filter = Filter::with_config(schema, config.filter.clone());
    filter.assign(filter_data)?;

    Ok(ApiResponse::success(CompiledFind {
        select: filter.to_sql(),
        count: filter.to_count_sql(),
    }))
}
