//! Capability schemas derived from record field metadata.
//!
//! Each record declares, per field, an exposed key, an optional store column,
//! capability tokens and a Rust type. [`derive_schema`] turns that into a
//! [`Schema`] of [`FieldDescriptor`]s whose operator sets gate every filter
//! a client may send.

pub mod builder;
pub mod infer;
pub mod record;
pub mod registry;
pub mod repr;
pub mod types;

pub use builder::{build_schema, derive_schema, label_for};
pub use infer::{infer, Rule, RULES};
pub use record::{FieldDef, Record, Tags};
pub use registry::SchemaRegistry;
pub use repr::{DeletedAt, FieldType, Repr, Scalar, Structured};
pub use types::{FieldDescriptor, Operator, Schema, SemanticType};
