pub mod types;
pub mod filter;
pub mod filter_value;
pub mod filter_where;
pub mod filter_order;
pub mod write;
pub mod error;

pub use types::*;
pub use filter::Filter;
pub use error::{FilterError, FilterErrorKind};
pub use write::{validate_write, WriteMode};
