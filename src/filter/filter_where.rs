use serde_json::{Map, Value};

use super::error::FilterError;
use super::filter_value::parse_operand;
use super::types::{FilterCondition, FilterValue, FilterWhereInfo, FilterWhereOptions};
use crate::introspect::{Operator, Schema};

pub struct FilterWhere<'a> {
    schema: &'a Schema,
    delimiter: char,
    max_depth: u32,
}

impl<'a> FilterWhere<'a> {
    pub fn new(schema: &'a Schema, delimiter: char, max_depth: u32) -> Self {
        Self { schema, delimiter, max_depth }
    }

    pub fn validate_shape(where_data: &Value) -> Result<(), FilterError> {
        match where_data {
            Value::Null | Value::Object(_) => Ok(()),
            _ => Err(FilterError::InvalidWhereClause("WHERE must be an object".to_string())),
        }
    }

    /// Validates every term of `where_data` against the schema.
    pub fn parse(&self, where_data: &Value) -> Result<FilterCondition, FilterError> {
        Self::validate_shape(where_data)?;
        match where_data {
            Value::Object(obj) => self.parse_object(obj, 0),
            _ => Ok(FilterCondition::And(vec![])),
        }
    }

    fn parse_object(&self, obj: &Map<String, Value>, depth: u32) -> Result<FilterCondition, FilterError> {
        if depth > self.max_depth {
            return Err(FilterError::InvalidWhereClause(format!(
                "nesting deeper than {} levels",
                self.max_depth
            )));
        }

        let mut conditions = Vec::with_capacity(obj.len());
        for (key, value) in obj {
            if key.starts_with('$') {
                conditions.push(self.parse_logical_operator(key, value, depth)?);
            } else {
                conditions.extend(self.parse_field_condition(key, value)?);
            }
        }
        Ok(FilterCondition::And(conditions))
    }

    fn parse_logical_operator(&self, op: &str, value: &Value, depth: u32) -> Result<FilterCondition, FilterError> {
        match op {
            "$and" | "$or" => {
                let arr = value
                    .as_array()
                    .ok_or_else(|| FilterError::InvalidWhereClause(format!("{} requires an array", op)))?;
                let children = arr
                    .iter()
                    .map(|v| match v {
                        Value::Object(obj) => self.parse_object(obj, depth + 1),
                        _ => Err(FilterError::InvalidWhereClause(format!("{} entries must be objects", op))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(if op == "$and" { FilterCondition::And(children) } else { FilterCondition::Or(children) })
            }
            "$not" => match value {
                Value::Object(obj) => Ok(FilterCondition::Not(Box::new(self.parse_object(obj, depth + 1)?))),
                _ => Err(FilterError::InvalidWhereClause("$not requires an object".to_string())),
            },
            _ => Err(FilterError::InvalidWhereClause(format!("unknown logical operator {}", op))),
        }
    }

    fn parse_field_condition(&self, key: &str, value: &Value) -> Result<Vec<FilterCondition>, FilterError> {
        let field = self.schema.get(key).ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        if !field.filterable {
            return Err(FilterError::NotFilterable(key.to_string()));
        }

        let terms: Vec<(Operator, Value)> = match value {
            Value::Object(obj) if obj.is_empty() => {
                return Err(FilterError::malformed(key, "expected at least one operator"));
            }
            Value::Object(obj) => obj
                .iter()
                .map(|(op_key, op_val)| {
                    let op = op_key
                        .strip_prefix('$')
                        .and_then(|_| op_key.parse::<Operator>().ok())
                        .ok_or_else(|| FilterError::unsupported(key, op_key.as_str()))?;
                    Ok((op, op_val.clone()))
                })
                .collect::<Result<_, FilterError>>()?,
            // { field: null } reads as "is null"
            Value::Null => vec![(Operator::IsNull, Value::Bool(true))],
            // implicit equality: { field: value }
            other => vec![(Operator::Eq, other.clone())],
        };

        terms
            .into_iter()
            .map(|(operator, raw)| {
                if !field.allows(operator) {
                    return Err(FilterError::unsupported(key, operator.as_str()));
                }
                let value = parse_operand(field, operator, &raw, self.delimiter)?;
                Ok(FilterCondition::Term(FilterWhereInfo {
                    key: key.to_string(),
                    column: field.column.clone(),
                    operator,
                    value,
                }))
            })
            .collect()
    }
}

/// Renders a validated condition tree into parameterised SQL.
pub struct FilterWhereSql {
    param_values: Vec<Value>,
    param_index: usize,
}

impl FilterWhereSql {
    pub fn new(starting_param_index: usize) -> Self {
        Self {
            param_values: vec![],
            param_index: starting_param_index,
        }
    }

    pub fn generate(
        condition: Option<&FilterCondition>,
        starting_param_index: usize,
        options: &FilterWhereOptions,
    ) -> (String, Vec<Value>) {
        let mut sql = Self::new(starting_param_index);
        let mut parts = vec![];

        if let Some(column) = options.soft_delete_column.as_deref() {
            if !options.include_deleted {
                parts.push(format!("\"{}\" IS NULL", column));
            }
        }
        if let Some(condition) = condition {
            if let Some(clause) = sql.build(condition) {
                parts.push(clause);
            }
        }

        let where_clause = if parts.is_empty() { "1=1".to_string() } else { parts.join(" AND ") };
        (where_clause, sql.param_values)
    }

    /// `None` for an empty conjunction, which constrains nothing.
    fn build(&mut self, condition: &FilterCondition) -> Option<String> {
        match condition {
            FilterCondition::Term(term) => Some(self.build_term(term)),
            FilterCondition::And(children) => {
                let parts: Vec<String> = children.iter().filter_map(|c| self.build(c)).collect();
                match parts.len() {
                    0 => None,
                    1 => parts.into_iter().next(),
                    _ => Some(format!("({})", parts.join(" AND "))),
                }
            }
            FilterCondition::Or(children) => {
                let parts: Vec<String> = children
                    .iter()
                    .map(|c| self.build(c).unwrap_or_else(|| "1=1".to_string()))
                    .collect();
                if parts.is_empty() {
                    Some("1=0".to_string())
                } else {
                    Some(format!("({})", parts.join(" OR ")))
                }
            }
            FilterCondition::Not(inner) => {
                let clause = self.build(inner).unwrap_or_else(|| "1=1".to_string());
                Some(format!("NOT ({})", clause))
            }
        }
    }

    fn build_term(&mut self, term: &FilterWhereInfo) -> String {
        let column = format!("\"{}\"", term.column);
        match (&term.operator, &term.value) {
            (Operator::IsNull, FilterValue::Null(true)) => format!("{} IS NULL", column),
            (Operator::IsNull, _) => format!("{} IS NOT NULL", column),
            (Operator::Between, FilterValue::Pair(low, high)) => {
                let low = self.param(low.clone());
                let high = self.param(high.clone());
                format!("{} BETWEEN {} AND {}", column, low, high)
            }
            (Operator::In, FilterValue::List(values)) => {
                let params: Vec<String> = values.iter().map(|v| self.param(v.clone())).collect();
                format!("{} IN ({})", column, params.join(", "))
            }
            (op, FilterValue::Single(value)) if op.is_text_search() => {
                let needle = escape_like(value.as_str().unwrap_or_default());
                let pattern = match op {
                    Operator::StartsWith => format!("{}%", needle),
                    Operator::EndsWith => format!("%{}", needle),
                    _ => format!("%{}%", needle),
                };
                format!("{}::text ILIKE {}", column, self.param(Value::String(pattern)))
            }
            (op, FilterValue::Single(value)) => {
                let symbol = match op {
                    Operator::Ne => "<>",
                    Operator::Gt => ">",
                    Operator::Gte => ">=",
                    Operator::Lt => "<",
                    Operator::Lte => "<=",
                    _ => "=",
                };
                format!("{} {} {}", column, symbol, self.param(value.clone()))
            }
            // Operands are parsed per operator; any other pairing matches nothing.
            (op, value) => {
                tracing::error!(operator = %op, ?value, "operand does not fit operator");
                "1=0".to_string()
            }
        }
    }

    fn param(&mut self, value: Value) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}

/// Escapes `LIKE` wildcards so client text matches literally.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
