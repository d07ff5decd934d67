use serde_json::json;

use catalog_api_rust::config::FilterConfig;
use catalog_api_rust::filter::{Filter, FilterData, FilterError, FilterErrorKind};
use catalog_api_rust::introspect::Schema;

fn product() -> &'static Schema {
    catalog_api_rust::models::registry().get("product").unwrap()
}

fn config() -> FilterConfig {
    FilterConfig {
        max_limit: Some(100),
        default_limit: None,
        list_delimiter: ',',
        max_nested_depth: 3,
        debug_logging: false,
    }
}

fn compile(data: serde_json::Value) -> Result<catalog_api_rust::filter::SqlResult, FilterError> {
    let data: FilterData = serde_json::from_value(data).unwrap();
    let mut filter = Filter::with_config(product(), config());
    filter.assign(data)?;
    Ok(filter.to_sql())
}

#[test]
fn contains_on_number_is_unsupported() {
    let err = compile(json!({"where": {"price": {"$contains": "9"}}})).unwrap_err();
    assert_eq!(err.kind(), FilterErrorKind::UnsupportedOperator);
    assert_eq!(err.field(), Some("price"));
}

#[test]
fn unknown_field_is_rejected() {
    let err = compile(json!({"where": {"colour": "red"}})).unwrap_err();
    assert_eq!(err, FilterError::UnknownField("colour".into()));
}

#[test]
fn unfilterable_field_is_rejected() {
    let err = compile(json!({"where": {"slug": "pan"}})).unwrap_err();
    assert_eq!(err, FilterError::NotFilterable("slug".into()));
}

#[test]
fn malformed_between_is_rejected() {
    let err = compile(json!({"where": {"price": {"$between": [1]}}})).unwrap_err();
    assert_eq!(err.kind(), FilterErrorKind::MalformedValue);
}

#[test]
fn compiles_text_search_and_ranges() {
    let sql = compile(json!({
        "where": {
            "name": {"$contains": "50%_off"},
            "price": {"$between": "10,20"},
            "status": {"$in": ["draft", "published"]}
        },
        "order": "price desc",
        "limit": 10
    }))
    .unwrap();

    assert!(sql.query.contains("\"deleted_at\" IS NULL"));
    assert!(sql.query.contains("\"name\"::text ILIKE $1"));
    assert!(sql.query.contains("\"price\" BETWEEN $2 AND $3"));
    assert!(sql.query.contains("\"status\" IN ($4, $5)"));
    assert!(sql.query.ends_with("ORDER BY \"price\" DESC LIMIT 10"));
    assert_eq!(
        sql.params,
        vec![json!("%50\\%\\_off%"), json!(10), json!(20), json!("draft"), json!("published")]
    );
}

#[test]
fn sort_requires_sortable_field() {
    let err = compile(json!({"order": "is_active"})).unwrap_err();
    assert_eq!(err, FilterError::NotSortable("is_active".into()));
}

#[test]
fn select_requires_visible_field() {
    let err = compile(json!({"select": ["category_id"]})).unwrap_err();
    assert_eq!(err, FilterError::NotVisible("category_id".into()));
}

#[test]
fn nullable_timestamp_accepts_is_null() {
    let schema = catalog_api_rust::models::registry().get("transaction_log").unwrap();
    let mut filter = Filter::with_config(schema, config());
    filter.where_clause(json!({"paid_time": {"$is_null": true}, "trx_date": {"$gte": "2024-01-01"}})).unwrap();
    let sql = filter.to_where_sql();
    assert!(sql.query.contains("\"paid_time\" IS NULL"));
    assert!(sql.query.contains("\"trx_date\" >= $1"));
    assert_eq!(sql.params, vec![json!("2024-01-01T00:00:00Z")]);
}

#[test]
fn equality_on_timestamp_is_unsupported() {
    let schema = catalog_api_rust::models::registry().get("transaction_log").unwrap();
    let mut filter = Filter::with_config(schema, config());
    let err = filter.where_clause(json!({"created_at": "2024-01-01"})).unwrap_err();
    assert_eq!(err.kind(), FilterErrorKind::UnsupportedOperator);
}
