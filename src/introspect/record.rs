use super::repr::Repr;

/// Raw metadata strings attached to a record field.
///
/// - `json`: exposed key, optionally followed by `,`-separated options
///   (`"deleted_at,omitempty"`). Empty or `"-"` hides the field.
/// - `store`: `;`-separated store tokens; `column:<name>` overrides the column.
/// - `ui`: `;`-separated capability tokens (`sortable`, `filterable`,
///   `editable`, `visible`, `creatable`, `selection:<ref>`).
/// - `time_format`: display/parse format for temporal fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tags {
    pub json: Option<&'static str>,
    pub store: Option<&'static str>,
    pub ui: Option<&'static str>,
    pub time_format: Option<&'static str>,
}

impl Tags {
    pub const fn new() -> Self {
        Self { json: None, store: None, ui: None, time_format: None }
    }

    pub const fn json(self, value: &'static str) -> Self {
        Self { json: Some(value), ..self }
    }

    pub const fn store(self, value: &'static str) -> Self {
        Self { store: Some(value), ..self }
    }

    pub const fn ui(self, value: &'static str) -> Self {
        Self { ui: Some(value), ..self }
    }

    pub const fn time_format(self, value: &'static str) -> Self {
        Self { time_format: Some(value), ..self }
    }
}

/// Static description of one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub repr: Repr,
    pub tags: Tags,
}

impl FieldDef {
    pub const fn new(name: &'static str, repr: Repr, tags: Tags) -> Self {
        Self { name, repr, tags }
    }
}

/// A record type with declared field metadata.
pub trait Record {
    const TABLE: &'static str;
    /// Fields in declaration order.
    const FIELDS: &'static [FieldDef];
}

/// Declares a record struct together with its [`Record`] metadata.
///
/// ```
/// use catalog_api_rust::record;
///
/// record! {
///     #[derive(Debug, Clone)]
///     pub struct Tag: "tags" {
///         #[field(json = "id", store = "primaryKey;column:id", ui = "sortable")]
///         pub id: u64,
///         #[field(json = "label", ui = "visible;filterable")]
///         pub label: String,
///         #[field()]
///         pub internal: bool,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident : $table:literal {
            $(
                #[field($($key:ident = $value:literal),* $(,)?)]
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        $vis struct $name {
            $( $fvis $field: $ty, )*
        }

        impl $crate::introspect::Record for $name {
            const TABLE: &'static str = $table;
            const FIELDS: &'static [$crate::introspect::FieldDef] = &[
                $(
                    $crate::introspect::FieldDef::new(
                        stringify!($field),
                        <$ty as $crate::introspect::FieldType>::REPR,
                        $crate::introspect::Tags::new() $( .$key($value) )*,
                    ),
                )*
            ];
        }
    };
}
