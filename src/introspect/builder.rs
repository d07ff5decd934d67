use heck::ToTitleCase;

use super::infer::infer;
use super::record::{FieldDef, Record};
use super::repr::{Repr, Structured};
use super::types::{FieldDescriptor, Schema};

const TOKEN_SEPARATOR: char = ';';
const COLUMN_PREFIX: &str = "column:";
const SELECTION_PREFIX: &str = "selection:";

/// Capability schema of a record type.
pub fn derive_schema<R: Record>() -> Schema {
    build_schema(R::TABLE, R::FIELDS)
}

/// Builds a schema from field metadata in declaration order.
///
/// Never fails: fields without an exposed key are skipped, and a key
/// declared twice keeps the last declaration.
pub fn build_schema(table: &str, fields: &[FieldDef]) -> Schema {
    let mut schema = Schema::new(table);

    for field in fields {
        let Some(key) = exposed_key(field) else { continue };
        let descriptor = describe(key, field);
        if let Some(previous) = schema.fields.insert(key.to_string(), descriptor) {
            tracing::warn!(
                table,
                key,
                field = field.name,
                previous_column = %previous.column,
                "duplicate exposed key, keeping last declaration"
            );
        }
    }

    tracing::debug!(table, fields = schema.len(), "derived schema");
    schema
}

fn describe(key: &str, field: &FieldDef) -> FieldDescriptor {
    let ui = field.tags.ui.unwrap_or_default();
    let (semantic_type, operators) = infer(field.repr);

    FieldDescriptor {
        key: key.to_string(),
        column: store_column(field.tags.store).unwrap_or(key).to_string(),
        label: label_for(key),
        semantic_type,
        operators: operators.to_vec(),
        format: field.repr.format().map(str::to_string),
        sortable: has_token(ui, "sortable"),
        filterable: has_token(ui, "filterable"),
        editable: has_token(ui, "editable"),
        visible: has_token(ui, "visible"),
        creatable: has_token(ui, "creatable"),
        selection: selection(ui).map(str::to_string),
        time_format: field
            .tags
            .time_format
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string),
        soft_delete: field.repr == Repr::Structured(Structured::SoftDelete),
    }
}

/// Exposed key from the `json` tag, or `None` when absent or suppressed.
fn exposed_key(field: &FieldDef) -> Option<&'static str> {
    let json = field.tags.json?;
    let key = json.split(',').next().unwrap_or_default().trim();
    match key {
        "" | "-" => None,
        key => Some(key),
    }
}

fn tokens(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(TOKEN_SEPARATOR).map(str::trim).filter(|t| !t.is_empty())
}

fn has_token(tag: &str, token: &str) -> bool {
    tokens(tag).any(|t| t == token)
}

fn prefixed<'a>(tag: &'a str, prefix: &'a str) -> impl Iterator<Item = &'a str> {
    tokens(tag)
        .filter_map(move |t| t.strip_prefix(prefix))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

// A repeated `column:` token overrides earlier ones.
fn store_column(store: Option<&str>) -> Option<&str> {
    prefixed(store?, COLUMN_PREFIX).last()
}

fn selection(ui: &str) -> Option<&str> {
    prefixed(ui, SELECTION_PREFIX).next()
}

/// Human title for an exposed key: `image_url` -> `Image Url`.
pub fn label_for(key: &str) -> String {
    key.to_title_case()
}
