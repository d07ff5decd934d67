use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Query operators a filter term may apply to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "$eq")] Eq,
    #[serde(rename = "$ne")] Ne,
    #[serde(rename = "$gt")] Gt,
    #[serde(rename = "$gte")] Gte,
    #[serde(rename = "$lt")] Lt,
    #[serde(rename = "$lte")] Lte,
    #[serde(rename = "$between")] Between,
    #[serde(rename = "$contains")] Contains,
    #[serde(rename = "$starts_with")] StartsWith,
    #[serde(rename = "$ends_with")] EndsWith,
    #[serde(rename = "$in")] In,
    #[serde(rename = "$is_null")] IsNull,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::Between,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::In,
        Operator::IsNull,
    ];

    /// Wire name used in filter documents, e.g. `$gte`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "$eq",
            Operator::Ne => "$ne",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::Between => "$between",
            Operator::Contains => "$contains",
            Operator::StartsWith => "$starts_with",
            Operator::EndsWith => "$ends_with",
            Operator::In => "$in",
            Operator::IsNull => "$is_null",
        }
    }

    pub fn is_ordering(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte | Operator::Between)
    }

    pub fn is_text_search(&self) -> bool {
        matches!(self, Operator::Contains | Operator::StartsWith | Operator::EndsWith)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    /// Accepts the wire name with or without the leading `$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix('$').unwrap_or(s);
        Operator::ALL
            .iter()
            .copied()
            .find(|op| &op.as_str()[1..] == name)
            .ok_or_else(|| s.to_string())
    }
}

/// Query-relevant category a field is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    String,
    Number,
    Boolean,
    DateTime,
}

impl SemanticType {
    /// Operators that may ever be legal for this type. Inferred operator
    /// sets are always a subset of this.
    pub fn permits(&self, op: Operator) -> bool {
        match self {
            SemanticType::String => !op.is_ordering(),
            SemanticType::Number => !op.is_text_search(),
            SemanticType::Boolean => matches!(op, Operator::Eq | Operator::IsNull),
            SemanticType::DateTime => !op.is_text_search(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability descriptor for one exposed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub column: String,
    pub label: String,
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    pub operators: Vec<Operator>,
    /// Value format hint (`integer`, `date-time`, `date`, `time`, `json`, `uuid`, `uri`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub sortable: bool,
    pub filterable: bool,
    pub editable: bool,
    pub visible: bool,
    pub creatable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    /// Set for soft-delete marker columns.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub soft_delete: bool,
}

impl FieldDescriptor {
    pub fn allows(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }
}

/// All exposed fields of one record type, keyed by exposed key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub table: String,
    pub fields: BTreeMap<String, FieldDescriptor>,
}

impl Schema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn filterable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.iter().filter(|f| f.filterable)
    }

    pub fn sortable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.iter().filter(|f| f.sortable)
    }

    pub fn visible(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.iter().filter(|f| f.visible)
    }

    /// Store column of the soft-delete marker, if the record has one.
    pub fn soft_delete_column(&self) -> Option<&str> {
        self.iter().find(|f| f.soft_delete).map(|f| f.column.as_str())
    }
}
