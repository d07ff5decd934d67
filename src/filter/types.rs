use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::introspect::Operator;

/// List request as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterData {
    pub select: Option<Vec<String>>,
    #[serde(rename = "where", alias = "where_clause")]
    pub where_clause: Option<Value>,
    pub order: Option<Value>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub include_deleted: bool,
}

/// Operand of a validated filter term, already parsed for its field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Single(Value),
    Pair(Value, Value),
    List(Vec<Value>),
    /// `true` for `IS NULL`, `false` for `IS NOT NULL`.
    Null(bool),
}

/// One validated `(field, operator, value)` term.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterWhereInfo {
    pub key: String,
    pub column: String,
    pub operator: Operator,
    pub value: FilterValue,
}

/// Validated WHERE tree.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    Term(FilterWhereInfo),
    And(Vec<FilterCondition>),
    Or(Vec<FilterCondition>),
    Not(Box<FilterCondition>),
}

#[derive(Debug, Clone, Default)]
pub struct FilterWhereOptions {
    /// Soft-delete column to exclude deleted rows on.
    pub soft_delete_column: Option<String>,
    pub include_deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOrderInfo {
    pub key: String,
    pub column: String,
    pub sort: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}
