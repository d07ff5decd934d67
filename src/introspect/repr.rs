use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Str,
    Int,
    UInt,
    Float,
    Bool,
    /// A point in time.
    Timestamp,
}

/// Recognized composite or special-purpose column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structured {
    Date,
    Time,
    Json,
    Uuid,
    Url,
    SoftDelete,
}

/// Declared representation of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    Scalar(Scalar),
    Nullable(Scalar),
    Structured(Structured),
    Unrecognized { type_name: &'static str, nullable: bool },
}

impl Repr {
    pub const fn unrecognized(type_name: &'static str) -> Self {
        Repr::Unrecognized { type_name, nullable: false }
    }

    /// Representation of `Option<T>` given the representation of `T`.
    pub const fn nullable(self) -> Self {
        match self {
            Repr::Scalar(s) | Repr::Nullable(s) => Repr::Nullable(s),
            Repr::Structured(s) => Repr::Structured(s),
            Repr::Unrecognized { type_name, .. } => Repr::Unrecognized { type_name, nullable: true },
        }
    }

    /// Value format hint for integral, temporal and structured representations.
    pub const fn format(&self) -> Option<&'static str> {
        match self {
            Repr::Scalar(Scalar::Int | Scalar::UInt) | Repr::Nullable(Scalar::Int | Scalar::UInt) => Some("integer"),
            Repr::Scalar(Scalar::Timestamp) | Repr::Nullable(Scalar::Timestamp) => Some("date-time"),
            Repr::Structured(Structured::SoftDelete) => Some("date-time"),
            Repr::Structured(Structured::Date) => Some("date"),
            Repr::Structured(Structured::Time) => Some("time"),
            Repr::Structured(Structured::Json) => Some("json"),
            Repr::Structured(Structured::Uuid) => Some("uuid"),
            Repr::Structured(Structured::Url) => Some("uri"),
            _ => None,
        }
    }

    pub const fn is_nullable(&self) -> bool {
        match self {
            Repr::Nullable(_) | Repr::Structured(_) => true,
            Repr::Unrecognized { nullable, .. } => *nullable,
            Repr::Scalar(_) => false,
        }
    }
}

/// Static representation of a Rust type used as a record field.
pub trait FieldType {
    const REPR: Repr;
}

/// Implements [`FieldType`] for a type.
///
/// `field_type!(Badge => Repr::Scalar(Scalar::Str))` maps it explicitly;
/// `field_type!(Blob)` declares it unrecognized.
#[macro_export]
macro_rules! field_type {
    ($ty:ty => $repr:expr) => {
        impl $crate::introspect::FieldType for $ty {
            const REPR: $crate::introspect::Repr = $repr;
        }
    };
    ($ty:ty) => {
        impl $crate::introspect::FieldType for $ty {
            const REPR: $crate::introspect::Repr =
                $crate::introspect::Repr::unrecognized(stringify!($ty));
        }
    };
}

macro_rules! scalar_types {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl FieldType for $ty {
                const REPR: Repr = Repr::Scalar(Scalar::$kind);
            }
        )+
    };
}

macro_rules! structured_types {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl FieldType for $ty {
                const REPR: Repr = Repr::Structured(Structured::$kind);
            }
        )+
    };
}

scalar_types!(Str: String, &'static str, char);
scalar_types!(Int: i8, i16, i32, i64, i128, isize);
scalar_types!(UInt: u8, u16, u32, u64, u128, usize);
scalar_types!(Float: f32, f64, rust_decimal::Decimal, bigdecimal::BigDecimal);
scalar_types!(Bool: bool);
scalar_types!(Timestamp: DateTime<Utc>, DateTime<FixedOffset>, NaiveDateTime);

structured_types!(Date: NaiveDate);
structured_types!(Time: NaiveTime);
structured_types!(Json: serde_json::Value);
structured_types!(Uuid: uuid::Uuid);
structured_types!(Url: url::Url);
structured_types!(SoftDelete: DeletedAt);

impl<T> FieldType for sqlx::types::Json<T> {
    const REPR: Repr = Repr::Structured(Structured::Json);
}

impl<T: FieldType> FieldType for Option<T> {
    const REPR: Repr = T::REPR.nullable();
}

/// Soft-delete marker column. A row with a timestamp here is treated as
/// deleted and hidden from list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeletedAt(pub Option<DateTime<Utc>>);

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;
    crate::field_type!(Opaque);

    #[test]
    fn option_wraps_scalars() {
        assert_eq!(<Option<i64>>::REPR, Repr::Nullable(Scalar::Int));
        assert_eq!(<Option<Option<String>>>::REPR, Repr::Nullable(Scalar::Str));
        assert_eq!(<Option<DateTime<Utc>>>::REPR, Repr::Nullable(Scalar::Timestamp));
    }

    #[test]
    fn option_keeps_structured() {
        assert_eq!(<Option<uuid::Uuid>>::REPR, Repr::Structured(Structured::Uuid));
        assert_eq!(<Option<sqlx::types::Json<Vec<u8>>>>::REPR, Repr::Structured(Structured::Json));
    }

    #[test]
    fn unrecognized_carries_type_name() {
        assert_eq!(Opaque::REPR, Repr::Unrecognized { type_name: "Opaque", nullable: false });
        assert!(<Option<Opaque>>::REPR.is_nullable());
    }
}
