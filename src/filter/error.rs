use thiserror::Error;

/// Rejections raised while validating client-supplied list, sort, select
/// and write terms against a schema. All of them are client errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{0}' is not filterable")]
    NotFilterable(String),

    #[error("Field '{0}' is not sortable")]
    NotSortable(String),

    #[error("Field '{0}' is not selectable")]
    NotVisible(String),

    #[error("Field '{0}' cannot be set on create")]
    NotCreatable(String),

    #[error("Field '{0}' cannot be updated")]
    NotEditable(String),

    #[error("Unsupported operator {operator} for field '{field}'")]
    UnsupportedOperator { field: String, operator: String },

    #[error("Malformed value for '{field}': {reason}")]
    MalformedValue { field: String, reason: String },

    #[error("Invalid WHERE clause: {0}")]
    InvalidWhereClause(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid offset: {0}")]
    InvalidOffset(String),
}

/// Coarse grouping of [`FilterError`]s for callers and error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorKind {
    UnknownField,
    UnsupportedOperator,
    MalformedValue,
    /// The field exists but lacks the capability the term needs.
    Capability,
    /// Structure of the request itself (where or order shape, body, paging).
    Request,
}

impl FilterError {
    pub fn unsupported(field: impl Into<String>, operator: impl Into<String>) -> Self {
        FilterError::UnsupportedOperator {
            field: field.into(),
            operator: operator.into(),
        }
    }

    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FilterError::MalformedValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FilterErrorKind {
        match self {
            FilterError::UnknownField(_) => FilterErrorKind::UnknownField,
            FilterError::UnsupportedOperator { .. } => FilterErrorKind::UnsupportedOperator,
            FilterError::MalformedValue { .. } => FilterErrorKind::MalformedValue,
            FilterError::NotFilterable(_)
            | FilterError::NotSortable(_)
            | FilterError::NotVisible(_)
            | FilterError::NotCreatable(_)
            | FilterError::NotEditable(_) => FilterErrorKind::Capability,
            FilterError::InvalidWhereClause(_)
            | FilterError::InvalidOrder(_)
            | FilterError::InvalidBody(_)
            | FilterError::InvalidLimit(_)
            | FilterError::InvalidOffset(_) => FilterErrorKind::Request,
        }
    }

    /// Field the error is about, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            FilterError::UnknownField(f)
            | FilterError::NotFilterable(f)
            | FilterError::NotSortable(f)
            | FilterError::NotVisible(f)
            | FilterError::NotCreatable(f)
            | FilterError::NotEditable(f) => Some(f),
            FilterError::UnsupportedOperator { field, .. } | FilterError::MalformedValue { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            FilterErrorKind::UnknownField => "UNKNOWN_FIELD",
            FilterErrorKind::UnsupportedOperator => "UNSUPPORTED_OPERATOR",
            FilterErrorKind::MalformedValue => "MALFORMED_VALUE",
            FilterErrorKind::Capability => "FIELD_NOT_ALLOWED",
            FilterErrorKind::Request => "INVALID_REQUEST",
        }
    }
}
