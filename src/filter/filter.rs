use serde_json::Value;

use super::error::FilterError;
use super::filter_order::FilterOrder;
use super::filter_where::{FilterWhere, FilterWhereSql};
use super::types::{FilterCondition, FilterData, FilterOrderInfo, FilterWhereOptions, SqlResult};
use crate::config::FilterConfig;
use crate::introspect::Schema;

/// Validated list query over one schema.
#[derive(Debug)]
pub struct Filter<'a> {
    schema: &'a Schema,
    config: FilterConfig,
    select_columns: Vec<(String, String)>,
    where_data: Option<FilterCondition>,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<i64>,
    offset: Option<i64>,
    include_deleted: bool,
}

impl<'a> Filter<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, crate::config::CONFIG.filter.clone())
    }

    pub fn with_config(schema: &'a Schema, config: FilterConfig) -> Self {
        Self {
            schema,
            config,
            select_columns: vec![],
            where_data: None,
            order_data: vec![],
            limit: None,
            offset: None,
            include_deleted: false,
        }
    }

    pub fn assign(&mut self, data: FilterData) -> Result<&mut Self, FilterError> {
        if let Some(select) = data.select { self.select(select)?; }
        if let Some(where_clause) = data.where_clause { self.where_clause(where_clause)?; }
        if let Some(order) = data.order { self.order(order)?; }
        if data.limit.is_some() || data.offset.is_some() { self.limit(data.limit, data.offset)?; }
        self.include_deleted(data.include_deleted);
        Ok(self)
    }

    /// Restricts output to the given keys; each must be a visible field.
    pub fn select(&mut self, keys: Vec<String>) -> Result<&mut Self, FilterError> {
        let mut columns = Vec::with_capacity(keys.len());
        for key in keys {
            let field = self.schema.get(&key).ok_or_else(|| FilterError::UnknownField(key.clone()))?;
            if !field.visible {
                return Err(FilterError::NotVisible(key));
            }
            columns.push((key, field.column.clone()));
        }
        self.select_columns = columns;
        Ok(self)
    }

    pub fn where_clause(&mut self, conditions: Value) -> Result<&mut Self, FilterError> {
        let parser = FilterWhere::new(self.schema, self.config.list_delimiter, self.config.max_nested_depth);
        self.where_data = Some(parser.parse(&conditions)?);
        Ok(self)
    }

    pub fn order(&mut self, order_spec: Value) -> Result<&mut Self, FilterError> {
        self.order_data = FilterOrder::validate_and_parse(self.schema, &order_spec)?;
        Ok(self)
    }

    pub fn limit(&mut self, limit: Option<i64>, offset: Option<i64>) -> Result<&mut Self, FilterError> {
        if let Some(l) = limit { if l < 0 { return Err(FilterError::InvalidLimit("Limit must be non-negative".to_string())); } }
        if let Some(o) = offset { if o < 0 { return Err(FilterError::InvalidOffset("Offset must be non-negative".to_string())); } }

        let applied = match (limit, self.config.max_limit) {
            (Some(l), Some(max)) if l > max => {
                if self.config.debug_logging {
                    tracing::warn!("Limit {} exceeds max {}, capping to max", l, max);
                }
                Some(max)
            }
            (l, _) => l,
        };

        self.limit = applied;
        self.offset = offset;
        Ok(self)
    }

    pub fn include_deleted(&mut self, include: bool) -> &mut Self {
        self.include_deleted = include;
        self
    }

    pub fn to_sql(&self) -> SqlResult {
        let where_result = self.to_where_sql();
        let order_clause = FilterOrder::generate(&self.order_data);
        let limit_clause = self.build_limit_clause();

        let query = [
            format!("SELECT {}", self.build_select_clause()),
            format!("FROM \"{}\"", self.schema.table),
            format!("WHERE {}", where_result.query),
            order_clause,
            limit_clause,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        self.log_sql(&query);
        SqlResult { query, params: where_result.params }
    }

    pub fn to_where_sql(&self) -> SqlResult {
        let options = FilterWhereOptions {
            soft_delete_column: self.schema.soft_delete_column().map(str::to_string),
            include_deleted: self.include_deleted,
        };
        let (query, params) = FilterWhereSql::generate(self.where_data.as_ref(), 0, &options);
        SqlResult { query, params }
    }

    pub fn to_count_sql(&self) -> SqlResult {
        let where_result = self.to_where_sql();
        let query = format!(
            "SELECT COUNT(*) as count FROM \"{}\" WHERE {}",
            self.schema.table, where_result.query
        );
        self.log_sql(&query);
        SqlResult { query, params: where_result.params }
    }

    fn log_sql(&self, query: &str) {
        if self.config.debug_logging {
            tracing::debug!(table = %self.schema.table, %query, "compiled filter");
        }
    }

    /// Requested columns, or every visible column when none were requested.
    /// Falls back to all exposed columns for records with nothing marked visible.
    fn build_select_clause(&self) -> String {
        let columns: Vec<(&str, &str)> = if !self.select_columns.is_empty() {
            self.select_columns.iter().map(|(k, c)| (k.as_str(), c.as_str())).collect()
        } else {
            let visible: Vec<_> = self.schema.visible().map(|f| (f.key.as_str(), f.column.as_str())).collect();
            if visible.is_empty() {
                self.schema.iter().map(|f| (f.key.as_str(), f.column.as_str())).collect()
            } else {
                visible
            }
        };

        if columns.is_empty() {
            return "*".to_string();
        }
        columns
            .into_iter()
            .map(|(key, column)| {
                if key == column {
                    format!("\"{}\"", column)
                } else {
                    format!("\"{}\" AS \"{}\"", column, key)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn build_limit_clause(&self) -> String {
        match (self.limit.or(self.config.default_limit), self.offset) {
            (Some(l), Some(o)) => format!("LIMIT {} OFFSET {}", l, o),
            (Some(l), None) => format!("LIMIT {}", l),
            (None, Some(o)) => format!("OFFSET {}", o),
            (None, None) => String::new(),
        }
    }
}
