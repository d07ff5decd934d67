pub mod product;
pub mod transaction_log;

use once_cell::sync::Lazy;

use crate::introspect::SchemaRegistry;

pub use product::{Badge, Category, Product, ProductVariant, Shop, SubCategory};
pub use transaction_log::TransactionLog;

static REGISTRY: Lazy<SchemaRegistry> = Lazy::new(|| {
    SchemaRegistry::new()
        .register::<Category>("category")
        .register::<SubCategory>("sub_category")
        .register::<Shop>("shop")
        .register::<Product>("product")
        .register::<ProductVariant>("product_variant")
        .register::<TransactionLog>("transaction_log")
});

/// Schemas of the shipped catalog models, keyed by resource name.
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::{Operator, SemanticType};

    #[test]
    fn registers_every_model() {
        let names: Vec<_> = registry().resources().collect();
        assert_eq!(
            names,
            ["category", "product", "product_variant", "shop", "sub_category", "transaction_log"]
        );
    }

    #[test]
    fn product_status_is_a_filterable_string() {
        let status = registry().get("product").and_then(|s| s.get("status")).unwrap();
        assert_eq!(status.semantic_type, SemanticType::String);
        assert!(status.filterable && status.sortable && status.editable);
        assert_eq!(status.selection.as_deref(), Some("/options?data=product_status"));
    }

    #[test]
    fn soft_deleted_models_expose_the_column() {
        let product = registry().get("product").unwrap();
        assert_eq!(product.soft_delete_column(), Some("deleted_at"));
        assert_eq!(registry().get("transaction_log").unwrap().soft_delete_column(), None);
    }

    #[test]
    fn nullable_trx_date_supports_is_null() {
        let trx_date = registry().get("transaction_log").and_then(|s| s.get("trx_date")).unwrap();
        assert_eq!(trx_date.semantic_type, SemanticType::DateTime);
        assert!(trx_date.allows(Operator::IsNull));
        assert!(!trx_date.allows(Operator::Eq));
    }
}
