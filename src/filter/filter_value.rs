use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::{Number, Value};

use super::error::FilterError;
use super::types::FilterValue;
use crate::introspect::{FieldDescriptor, Operator, SemanticType};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Parses the raw operand of a filter term for the field's type and the
/// operator's arity.
pub fn parse_operand(
    field: &FieldDescriptor,
    operator: Operator,
    raw: &Value,
    delimiter: char,
) -> Result<FilterValue, FilterError> {
    match operator {
        Operator::IsNull => parse_flag(raw)
            .map(FilterValue::Null)
            .ok_or_else(|| FilterError::malformed(&field.key, "$is_null expects true or false")),
        Operator::Between => {
            let items = split_list(raw, delimiter);
            match items.as_deref() {
                Some([low, high]) => Ok(FilterValue::Pair(coerce(field, low)?, coerce(field, high)?)),
                _ => Err(FilterError::malformed(&field.key, "$between expects exactly two values")),
            }
        }
        Operator::In => {
            let items = match raw {
                Value::Array(_) | Value::String(_) => split_list(raw, delimiter).unwrap_or_default(),
                Value::Null => vec![],
                other => vec![other.clone()],
            };
            if items.is_empty() {
                return Err(FilterError::malformed(&field.key, "$in expects at least one value"));
            }
            let values = items.iter().map(|v| coerce(field, v)).collect::<Result<Vec<_>, _>>()?;
            Ok(FilterValue::List(values))
        }
        Operator::Contains | Operator::StartsWith | Operator::EndsWith => match raw {
            Value::String(s) if !s.is_empty() => Ok(FilterValue::Single(Value::String(s.clone()))),
            Value::Number(n) => Ok(FilterValue::Single(Value::String(n.to_string()))),
            _ => Err(FilterError::malformed(&field.key, format!("{} expects a non-empty string", operator))),
        },
        Operator::Eq | Operator::Ne | Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
            if raw.is_null() {
                return Err(FilterError::malformed(&field.key, format!("{} does not accept null, use $is_null", operator)));
            }
            Ok(FilterValue::Single(coerce(field, raw)?))
        }
    }
}

/// Converts a client value to the canonical JSON form for the field.
pub fn coerce(field: &FieldDescriptor, raw: &Value) -> Result<Value, FilterError> {
    let malformed = |reason: &str| FilterError::malformed(&field.key, reason);

    match field.format.as_deref() {
        Some("json") => return Ok(raw.clone()),
        Some("uuid") => {
            let s = raw.as_str().ok_or_else(|| malformed("expected a UUID string"))?;
            let id = uuid::Uuid::parse_str(s.trim()).map_err(|_| malformed("invalid UUID"))?;
            return Ok(Value::String(id.to_string()));
        }
        Some("uri") => {
            let s = raw.as_str().ok_or_else(|| malformed("expected a URL string"))?;
            let url = url::Url::parse(s.trim()).map_err(|_| malformed("invalid URL"))?;
            return Ok(Value::String(url.to_string()));
        }
        _ => {}
    }

    match field.semantic_type {
        SemanticType::String => match raw {
            Value::String(_) => Ok(raw.clone()),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            _ => Err(malformed("expected a string")),
        },
        SemanticType::Number if field.format.as_deref() == Some("integer") => match raw {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(raw.clone()),
            Value::String(s) => parse_integer(s.trim()).ok_or_else(|| malformed("expected an integer")),
            _ => Err(malformed("expected an integer")),
        },
        SemanticType::Number => match raw {
            Value::Number(_) => Ok(raw.clone()),
            Value::String(s) => parse_number(s.trim()).ok_or_else(|| malformed("expected a number")),
            _ => Err(malformed("expected a number")),
        },
        SemanticType::Boolean => parse_flag(raw)
            .map(Value::Bool)
            .ok_or_else(|| malformed("expected true or false")),
        SemanticType::DateTime => {
            let s = raw.as_str().ok_or_else(|| malformed("expected a date/time string"))?;
            parse_temporal(s.trim(), field.format.as_deref(), field.time_format.as_deref())
                .map(Value::String)
                .ok_or_else(|| malformed("unrecognized date/time"))
        }
    }
}

fn parse_integer(s: &str) -> Option<Value> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Number(i.into()));
    }
    s.parse::<u64>().ok().map(|u| Value::Number(u.into()))
}

fn parse_number(s: &str) -> Option<Value> {
    parse_integer(s).or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64).map(Value::Number))
}

fn parse_flag(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Array items as-is, or a delimited string split into trimmed string items.
fn split_list(raw: &Value, delimiter: char) -> Option<Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items.clone()),
        Value::String(s) => Some(
            s.split(delimiter)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect(),
        ),
        _ => None,
    }
}

/// Canonical string for a temporal value: RFC 3339 (UTC) for points in
/// time, `YYYY-MM-DD` for dates and `HH:MM:SS` for times.
fn parse_temporal(s: &str, format: Option<&str>, time_format: Option<&str>) -> Option<String> {
    match format {
        Some("date") => time_format
            .into_iter()
            .chain([DATE_FORMAT])
            .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
            .map(|d| d.format(DATE_FORMAT).to_string()),
        Some("time") => time_format
            .into_iter()
            .chain(TIME_FORMATS.iter().copied())
            .find_map(|f| NaiveTime::parse_from_str(s, f).ok())
            .map(|t| t.format("%H:%M:%S").to_string()),
        _ => parse_instant(s, time_format).map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
    }
}

fn parse_instant(s: &str, time_format: Option<&str>) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = time_format
        .into_iter()
        .chain(DATE_TIME_FORMATS.iter().copied())
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            time_format
                .into_iter()
                .chain([DATE_FORMAT])
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::{build_schema, FieldDef, Repr, Scalar, Structured, Tags};
    use serde_json::json;

    fn descriptor(repr: Repr, time_format: Option<&'static str>) -> FieldDescriptor {
        let mut tags = Tags::new().json("f");
        if let Some(fmt) = time_format {
            tags = tags.time_format(fmt);
        }
        build_schema("t", &[FieldDef::new("f", repr, tags)]).get("f").cloned().unwrap()
    }

    #[test]
    fn between_accepts_array_or_delimited_string() {
        let price = descriptor(Repr::Scalar(Scalar::Float), None);
        let expected = FilterValue::Pair(json!(10), json!(20.5));
        assert_eq!(parse_operand(&price, Operator::Between, &json!([10, 20.5]), ',').unwrap(), expected);
        assert_eq!(parse_operand(&price, Operator::Between, &json!("10, 20.5"), ',').unwrap(), expected);
    }

    #[test]
    fn between_rejects_wrong_arity() {
        let price = descriptor(Repr::Scalar(Scalar::Float), None);
        for raw in [json!([1]), json!([1, 2, 3]), json!("1"), json!(5)] {
            let err = parse_operand(&price, Operator::Between, &raw, ',').unwrap_err();
            assert!(matches!(err, FilterError::MalformedValue { .. }), "{raw}");
        }
    }

    #[test]
    fn in_splits_on_configured_delimiter() {
        let name = descriptor(Repr::Scalar(Scalar::Str), None);
        let parsed = parse_operand(&name, Operator::In, &json!("a|b| c"), '|').unwrap();
        assert_eq!(parsed, FilterValue::List(vec![json!("a"), json!("b"), json!("c")]));
        assert!(parse_operand(&name, Operator::In, &json!([]), ',').is_err());
        assert!(parse_operand(&name, Operator::In, &json!(" , "), ',').is_err());
    }

    #[test]
    fn numbers_parse_from_strings() {
        let stock = descriptor(Repr::Scalar(Scalar::Int), None);
        assert_eq!(coerce(&stock, &json!("42")).unwrap(), json!(42));
        assert!(coerce(&stock, &json!("many")).is_err());
        assert!(coerce(&stock, &json!(true)).is_err());

        let price = descriptor(Repr::Scalar(Scalar::Float), None);
        assert_eq!(coerce(&price, &json!("1.5")).unwrap(), json!(1.5));
        assert_eq!(coerce(&price, &json!("7")).unwrap(), json!(7));
    }

    #[test]
    fn integer_fields_reject_fractions() {
        let stock = descriptor(Repr::Scalar(Scalar::Int), None);
        assert_eq!(stock.format.as_deref(), Some("integer"));
        assert_eq!(coerce(&stock, &json!("1.5")).unwrap_err(), FilterError::malformed("f", "expected an integer"));
        assert!(coerce(&stock, &json!(1.5)).is_err());
        assert_eq!(coerce(&stock, &json!(-3)).unwrap(), json!(-3));

        let id = descriptor(Repr::Nullable(Scalar::UInt), None);
        assert_eq!(coerce(&id, &json!("18446744073709551615")).unwrap(), json!(u64::MAX));
        assert!(parse_operand(&id, Operator::In, &json!("1,2.5"), ',').is_err());
    }

    #[test]
    fn timestamps_normalize_to_utc() {
        let at = descriptor(Repr::Scalar(Scalar::Timestamp), None);
        assert_eq!(coerce(&at, &json!("2024-03-01T10:00:00+02:00")).unwrap(), json!("2024-03-01T08:00:00Z"));
        assert_eq!(coerce(&at, &json!("2024-03-01")).unwrap(), json!("2024-03-01T00:00:00Z"));
        assert!(coerce(&at, &json!("yesterday")).is_err());
    }

    #[test]
    fn time_format_tag_is_honoured() {
        let at = descriptor(Repr::Nullable(Scalar::Timestamp), Some("%d/%m/%Y %H:%M"));
        assert_eq!(coerce(&at, &json!("01/03/2024 10:30")).unwrap(), json!("2024-03-01T10:30:00Z"));

        let day = descriptor(Repr::Structured(Structured::Date), Some("%d/%m/%Y"));
        assert_eq!(coerce(&day, &json!("01/03/2024")).unwrap(), json!("2024-03-01"));
    }

    #[test]
    fn uuid_values_are_validated() {
        let id = descriptor(Repr::Structured(Structured::Uuid), None);
        let raw = json!("67E55044-10B1-426F-9247-BB680E5FE0C8");
        assert_eq!(coerce(&id, &raw).unwrap(), json!("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(coerce(&id, &json!("not-a-uuid")).is_err());
    }

    #[test]
    fn is_null_takes_a_flag() {
        let name = descriptor(Repr::Nullable(Scalar::Str), None);
        assert_eq!(parse_operand(&name, Operator::IsNull, &json!(false), ',').unwrap(), FilterValue::Null(false));
        assert!(parse_operand(&name, Operator::IsNull, &json!("maybe"), ',').is_err());
    }

    #[test]
    fn eq_rejects_null() {
        let name = descriptor(Repr::Scalar(Scalar::Str), None);
        assert!(parse_operand(&name, Operator::Eq, &Value::Null, ',').is_err());
    }
}
