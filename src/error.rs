use crate::value::{PropertyKey, Value, ValueType};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while calling a [Function](crate::Function) or resolving a
/// method to call
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Attempted to call a property that doesn't hold a function
    #[error("{key} is not a function (found {actual})")]
    NotCallable { key: PropertyKey, actual: ValueType },

    /// A function body raised a value. The value is passed through untouched
    #[error("Uncaught {0}")]
    Thrown(Value),
}

/// Error converting a [Value] into some other type
#[derive(Debug, Error)]
pub enum ValueError {
    /// Value has the wrong variant for the requested type
    #[error("Expected {expected}, received {actual}")]
    Type {
        expected: ValueType,
        actual: ValueType,
    },

    /// Integer is too large to be stored as a [Number](crate::Number)
    #[error("{number} cannot be represented as a number")]
    Conversion { number: u64 },
}

#[cfg(test)]
static_assertions::assert_impl_all!(Error: Send, Sync);
