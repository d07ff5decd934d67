use std::collections::BTreeMap;

use serde_json::Value;

use super::error::FilterError;
use super::filter_value::coerce;
use crate::introspect::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Update,
}

/// Checks a create/update body against the schema and maps it to store
/// columns. `null` values pass through untouched.
pub fn validate_write(schema: &Schema, body: &Value, mode: WriteMode) -> Result<BTreeMap<String, Value>, FilterError> {
    let obj = body
        .as_object()
        .ok_or_else(|| FilterError::InvalidBody("expected a JSON object".to_string()))?;

    let mut columns = BTreeMap::new();
    for (key, value) in obj {
        let field = schema.get(key).ok_or_else(|| FilterError::UnknownField(key.clone()))?;
        match mode {
            WriteMode::Create if !field.creatable => return Err(FilterError::NotCreatable(key.clone())),
            WriteMode::Update if !field.editable => return Err(FilterError::NotEditable(key.clone())),
            _ => {}
        }
        let value = if value.is_null() { Value::Null } else { coerce(field, value)? };
        columns.insert(field.column.clone(), value);
    }
    Ok(columns)
}
