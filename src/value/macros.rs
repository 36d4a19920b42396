//! Macros for implementing traits on various types

/// Implement a numeric binary operator for [Value]
macro_rules! impl_value_numeric_binary_op {
    ($trait:ident, $func:ident, $op:tt) => {
        impl $trait for Value {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                match (self.to_number(), rhs.to_number()) {
                    (Some(lhs), Some(rhs)) => (lhs $op rhs).into(),
                    _ => Number::NAN.into(),
                }
            }
        }
    };
}

/// Implement `From<T>` for `Value`, where `T` is convertible to a particular
/// `Value` variant.
macro_rules! impl_value_from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for $crate::Value {
            fn from(value: $type) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

/// Unwrap a particular variant from a value, or return a type error from the
/// enclosing function
macro_rules! ensure_type {
    ($value:expr, $variant:ident, $type_variant:ident) => {
        if let $crate::Value::$variant(value) = $value {
            value
        } else {
            return Err($crate::error::ValueError::Type {
                expected: $crate::ValueType::$type_variant,
                actual: $value.type_(),
            });
        }
    };
}

pub(crate) use ensure_type;
pub(crate) use impl_value_from;
pub(crate) use impl_value_numeric_binary_op;
