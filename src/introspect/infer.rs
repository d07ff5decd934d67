use super::repr::{Repr, Scalar, Structured};
use super::types::{Operator, SemanticType};

use Operator::*;

const TEMPORAL_OPS: &[Operator] = &[Gt, Gte, Lt, Lte, Between, IsNull];
const TEXT_OPS: &[Operator] = &[Eq, Ne, Contains, StartsWith, EndsWith, In, IsNull];
const NUMERIC_OPS: &[Operator] = &[Eq, Ne, Gt, Gte, Lt, Lte, Between, In, IsNull];
const BOOLEAN_OPS: &[Operator] = &[Eq, IsNull];
const JSON_OPS: &[Operator] = &[Contains, IsNull];
const UUID_OPS: &[Operator] = &[Eq, Ne, In, IsNull];
const URL_OPS: &[Operator] = &[Contains, StartsWith, EndsWith, IsNull];
const FALLBACK_OPS: &[Operator] = &[Eq];
const NULLABLE_FALLBACK_OPS: &[Operator] = &[Eq, IsNull];

/// One row of the inference table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub repr: Repr,
    pub semantic_type: SemanticType,
    pub operators: &'static [Operator],
}

const fn rule(repr: Repr, semantic_type: SemanticType, operators: &'static [Operator]) -> Rule {
    Rule { repr, semantic_type, operators }
}

/// Representation rules, most specific first. Unrecognized representations
/// never match a row and take the fallback.
pub const RULES: &[Rule] = &[
    // exact point-in-time
    rule(Repr::Scalar(Scalar::Timestamp), SemanticType::DateTime, TEMPORAL_OPS),
    // nullable wrappers
    rule(Repr::Nullable(Scalar::Str), SemanticType::String, TEXT_OPS),
    rule(Repr::Nullable(Scalar::Int), SemanticType::Number, NUMERIC_OPS),
    rule(Repr::Nullable(Scalar::UInt), SemanticType::Number, NUMERIC_OPS),
    rule(Repr::Nullable(Scalar::Float), SemanticType::Number, NUMERIC_OPS),
    rule(Repr::Nullable(Scalar::Bool), SemanticType::Boolean, BOOLEAN_OPS),
    rule(Repr::Nullable(Scalar::Timestamp), SemanticType::DateTime, TEMPORAL_OPS),
    // structured
    rule(Repr::Structured(Structured::Date), SemanticType::DateTime, TEMPORAL_OPS),
    rule(Repr::Structured(Structured::Time), SemanticType::DateTime, TEMPORAL_OPS),
    rule(Repr::Structured(Structured::Json), SemanticType::String, JSON_OPS),
    rule(Repr::Structured(Structured::Uuid), SemanticType::String, UUID_OPS),
    rule(Repr::Structured(Structured::Url), SemanticType::String, URL_OPS),
    rule(Repr::Structured(Structured::SoftDelete), SemanticType::DateTime, TEMPORAL_OPS),
    // primitive kinds
    rule(Repr::Scalar(Scalar::Int), SemanticType::Number, NUMERIC_OPS),
    rule(Repr::Scalar(Scalar::UInt), SemanticType::Number, NUMERIC_OPS),
    rule(Repr::Scalar(Scalar::Float), SemanticType::Number, NUMERIC_OPS),
    rule(Repr::Scalar(Scalar::Str), SemanticType::String, TEXT_OPS),
    rule(Repr::Scalar(Scalar::Bool), SemanticType::Boolean, BOOLEAN_OPS),
];

/// Semantic type and legal operators for a field representation.
///
/// Total: anything without a rule is a `String` limited to `$eq`
/// (plus `$is_null` when wrapped in `Option`).
pub fn infer(repr: Repr) -> (SemanticType, &'static [Operator]) {
    if let Some(rule) = RULES.iter().find(|rule| rule.repr == repr) {
        return (rule.semantic_type, rule.operators);
    }

    let operators = if repr.is_nullable() { NULLABLE_FALLBACK_OPS } else { FALLBACK_OPS };
    (SemanticType::String, operators)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_respects_its_type_vocabulary() {
        for rule in RULES {
            assert!(!rule.operators.is_empty(), "{:?}", rule.repr);
            for op in rule.operators {
                assert!(
                    rule.semantic_type.permits(*op),
                    "{:?} grants {} to {}",
                    rule.repr,
                    op,
                    rule.semantic_type
                );
            }
        }
    }

    #[test]
    fn rules_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            assert!(RULES[i + 1..].iter().all(|b| b.repr != a.repr), "{:?} listed twice", a.repr);
        }
    }

    #[test]
    fn nullable_adds_is_null_to_the_scalar_set() {
        for scalar in [Scalar::Str, Scalar::Int, Scalar::UInt, Scalar::Float, Scalar::Bool, Scalar::Timestamp] {
            let (plain_type, plain_ops) = infer(Repr::Scalar(scalar));
            let (wrapped_type, wrapped_ops) = infer(Repr::Nullable(scalar));
            assert_eq!(plain_type, wrapped_type);
            assert!(wrapped_ops.contains(&IsNull));
            assert!(plain_ops.iter().all(|op| wrapped_ops.contains(op)));
        }
    }

    #[test]
    fn unrecognized_gets_only_eq() {
        assert_eq!(infer(Repr::unrecognized("Blob")), (SemanticType::String, &[Eq][..]));
        assert_eq!(infer(Repr::unrecognized("Blob").nullable()), (SemanticType::String, &[Eq, IsNull][..]));
    }

    #[test]
    fn identifiers_and_documents_are_not_ordered() {
        let (_, uuid) = infer(Repr::Structured(Structured::Uuid));
        assert!(uuid.iter().all(|op| !op.is_ordering() && !op.is_text_search()));

        let (_, json) = infer(Repr::Structured(Structured::Json));
        assert!(!json.contains(&Eq));
        assert!(json.iter().all(|op| !op.is_ordering()));

        let (_, url) = infer(Repr::Structured(Structured::Url));
        assert!(!url.contains(&Eq) && !url.contains(&Ne));
    }
}
