//! Runtime values

mod array;
#[cfg(feature = "serde")]
mod cereal;
mod function;
mod key;
mod macros;
mod number;
mod object;
mod properties;
mod string;
mod symbol;

pub use array::Array;
pub use function::Function;
pub use key::PropertyKey;
pub use number::Number;
pub use object::Object;
pub use properties::{OwnProperties, Properties};
pub use string::PetitString;
pub use symbol::Symbol;

use crate::{
    error::ValueError,
    value::macros::{ensure_type, impl_value_from, impl_value_numeric_binary_op},
};
use indexmap::IndexMap;
use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Rem},
};

/// Any value that can be stored in an object
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value. Looking up a missing key yields this.
    ///
    /// This value serializes as the unit value: `()`
    #[default]
    Undefined,
    /// An explicitly empty value
    ///
    /// This value serializes as `None`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A float or integer
    Number(Number),
    /// A string of UTF-8 characters
    String(PetitString),
    /// A unique token, compared by identity
    Symbol(Symbol),
    /// An ordered list
    Array(Array),
    /// An ordered key-value mapping
    Object(Object),
    /// A callable value, which can also carry its own properties
    Function(Function),
}

#[cfg(test)]
static_assertions::assert_impl_all!(Value: Send, Sync);

impl Value {
    /// Coerce this value to a number.
    /// | Type        | Value   | Coercion |
    /// | ----------- | ------- | -------- |
    /// | `undefined` |         | `NaN`    |
    /// | `null`      |         | `0`      |
    /// | `boolean`   | `false` | `0`      |
    /// | `boolean`   | `true`  | `1`      |
    /// | `number`    |         | Itself   |
    /// | `string`    |         | `None`   |
    /// | `symbol`    |         | `None`   |
    /// | `array`     |         | `None`   |
    /// | `object`    |         | `None`   |
    /// | `function`  |         | `None`   |
    pub fn to_number(&self) -> Option<Number> {
        match self {
            Self::Undefined => Some(Number::NAN),
            Self::Null | Self::Boolean(false) => Some(0.into()),
            Self::Boolean(true) => Some(1.into()),
            Self::Number(number) => Some(*number),
            Self::String(_)
            | Self::Symbol(_)
            | Self::Array(_)
            | Self::Object(_)
            | Self::Function(_) => None,
        }
    }

    /// Is this value `null` or `undefined`?
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// If this value is a function, get the inner function. Otherwise return a
    /// type error.
    pub fn try_into_function(self) -> Result<Function, ValueError> {
        Ok(ensure_type!(self, Function, Function))
    }

    /// Get the type of this value
    pub fn type_(&self) -> ValueType {
        match self {
            Self::Undefined => ValueType::Undefined,
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Symbol(_) => ValueType::Symbol,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
            Self::Function(_) => ValueType::Function,
        }
    }

    /// Look up a property on this value. Objects and functions resolve the key
    /// through their prototype chain. Every other type has no properties, so
    /// the result is always undefined.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        match self {
            Self::Object(object) => object.get(key),
            Self::Function(function) => function.get(key),
            _ => Value::Undefined,
        }
    }

    /// Apply nullish coalescing (??)
    /// <https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Nullish_coalescing>
    pub fn coalesce(self, other: Self) -> Self {
        if self.is_nullish() {
            other
        } else {
            self
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => write!(f, "{string}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Array(array) => write!(f, "{array}"),
            Self::Object(object) => write!(f, "{object}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

impl Add for Value {
    type Output = Self;

    /// Numeric addition if both sides are numbers. If either side is a string,
    /// both are stringified and concatenated.
    /// <https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Addition>
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Number(n1), Self::Number(n2)) => (n1 + n2).into(),
            (Self::String(s1), Self::String(s2)) => (s1 + s2).into(),
            (lhs @ Self::String(_), rhs) | (lhs, rhs @ Self::String(_)) => {
                format!("{lhs}{rhs}").into()
            }
            (lhs, rhs) => match (lhs.to_number(), rhs.to_number()) {
                (Some(n1), Some(n2)) => (n1 + n2).into(),
                _ => format!("{lhs}{rhs}").into(),
            },
        }
    }
}

impl_value_numeric_binary_op!(Mul, mul, *);
impl_value_numeric_binary_op!(Rem, rem, %);

impl_value_from!(bool, Boolean);
impl_value_from!(Number, Number);
impl_value_from!(i8, Number);
impl_value_from!(u8, Number);
impl_value_from!(i16, Number);
impl_value_from!(u16, Number);
impl_value_from!(i32, Number);
impl_value_from!(u32, Number);
impl_value_from!(i64, Number);
impl_value_from!(f32, Number);
impl_value_from!(f64, Number);
impl_value_from!(PetitString, String);
impl_value_from!(String, String);
impl_value_from!(&str, String);
impl_value_from!(char, String);
impl_value_from!(Symbol, Symbol);
impl_value_from!(Vec<Value>, Array);
impl_value_from!(Array, Array);
impl_value_from!(Object, Object);
impl_value_from!(Function, Function);

impl<K: Into<PropertyKey>, V: Into<Value>> From<IndexMap<K, V>> for Value {
    fn from(map: IndexMap<K, V>) -> Self {
        Self::Object(map.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` becomes `null`
    fn from(value: Option<T>) -> Self {
        value.map(T::into).unwrap_or(Value::Null)
    }
}

/// Possible types for a value
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    Array,
    Object,
    Function,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Symbol => write!(f, "symbol"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::Function => write!(f, "function"),
        }
    }
}
