use crate::error::ValueError;
use std::{
    fmt::{self, Display},
    ops::{Add, Mul, Rem},
};

/// A number, stored as an integer when possible. Integer arithmetic that
/// overflows falls back to floats.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Not a Number
    pub const NAN: Self = Self::Float(f64::NAN);

    /// Widen to a float
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(n) if n.is_nan() => write!(f, "NaN"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(l0), Self::Int(r0)) => l0 == r0,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

/// Implement an arithmetic operator that uses checked integer math when both
/// operands are ints, and float math otherwise
macro_rules! impl_number_binary_op {
    ($trait:ident, $func:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Self;

            fn $func(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Number::Int(lhs), Number::Int(rhs)) => lhs
                        .$checked(rhs)
                        .map(Number::Int)
                        .unwrap_or_else(|| {
                            Number::Float((lhs as f64) $op (rhs as f64))
                        }),
                    (lhs, rhs) => Number::Float(lhs.to_f64() $op rhs.to_f64()),
                }
            }
        }
    };
}

impl_number_binary_op!(Add, add, checked_add, +);
impl_number_binary_op!(Mul, mul, checked_mul, *);
impl_number_binary_op!(Rem, rem, checked_rem, %);

macro_rules! impl_from_int {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Number {
                fn from(value: $type) -> Self {
                    Self::Int(value.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// `u64` may not fit in an `i64`
impl TryFrom<u64> for Number {
    type Error = ValueError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::Int)
            .map_err(|_| ValueError::Conversion { number: value })
    }
}
