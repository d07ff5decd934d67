use serde_json::Value;

use super::error::FilterError;
use super::types::{FilterOrderInfo, SortDirection};
use crate::introspect::Schema;

pub struct FilterOrder;

impl FilterOrder {
    /// Accepts `"name desc, price"`, `["name desc", "price"]` or
    /// `{"name": "desc"}`; every key must be a sortable field.
    pub fn validate_and_parse(schema: &Schema, order: &Value) -> Result<Vec<FilterOrderInfo>, FilterError> {
        let mut specs: Vec<(String, String)> = Vec::new();
        match order {
            Value::Null => {}
            Value::String(s) => specs.extend(Self::split_order_string(s)),
            Value::Array(arr) => {
                for v in arr {
                    match v {
                        Value::String(s) => specs.extend(Self::split_order_string(s)),
                        _ => return Err(FilterError::InvalidOrder("order entries must be strings".to_string())),
                    }
                }
            }
            Value::Object(obj) => {
                for (k, v) in obj {
                    let dir = match v {
                        Value::String(s) => s.clone(),
                        Value::Null => "asc".to_string(),
                        other => other.to_string(),
                    };
                    specs.push((k.clone(), dir));
                }
            }
            _ => return Err(FilterError::InvalidOrder("order must be a string, array or object".to_string())),
        }

        specs
            .into_iter()
            .map(|(key, dir)| Self::resolve(schema, &key, &dir))
            .collect()
    }

    fn split_order_string(s: &str) -> Vec<(String, String)> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| {
                let mut it = part.split_whitespace();
                let col = it.next()?;
                let rest: Vec<&str> = it.collect();
                let dir = if rest.is_empty() { "asc".to_string() } else { rest.join(" ") };
                Some((col.to_string(), dir))
            })
            .collect()
    }

    fn resolve(schema: &Schema, key: &str, dir: &str) -> Result<FilterOrderInfo, FilterError> {
        let field = schema.get(key).ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        if !field.sortable {
            return Err(FilterError::NotSortable(key.to_string()));
        }
        let sort = match dir.trim().to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(FilterError::malformed(key, format!("unknown sort direction '{}'", other))),
        };
        Ok(FilterOrderInfo {
            key: key.to_string(),
            column: field.column.clone(),
            sort,
        })
    }

    pub fn generate(infos: &[FilterOrderInfo]) -> String {
        if infos.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = infos
            .iter()
            .map(|i| format!("\"{}\" {}", i.column, i.sort.to_sql()))
            .collect();
        format!("ORDER BY {}", parts.join(", "))
    }
}
