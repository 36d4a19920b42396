use crate::value::{PetitString, Symbol};
use std::fmt::{self, Display};

/// The key of an object property: either a string or a [Symbol]. Integer
/// keys are stored as their decimal string, so `3` and `"3"` are the same key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PropertyKey {
    String(PetitString),
    Symbol(Symbol),
}

impl PropertyKey {
    /// Get the string key, or `None` for a symbol key
    pub fn as_string(&self) -> Option<&PetitString> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Symbol(symbol) => write!(f, "[{symbol}]"),
        }
    }
}

impl From<PetitString> for PropertyKey {
    fn from(value: PetitString) -> Self {
        Self::String(value)
    }
}

impl From<&PetitString> for PropertyKey {
    fn from(value: &PetitString) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl From<char> for PropertyKey {
    fn from(value: char) -> Self {
        Self::String(value.into())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(value: &Symbol) -> Self {
        Self::Symbol(value.clone())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(value: &PropertyKey) -> Self {
        value.clone()
    }
}

/// Integer keys, which are stored as their decimal string
macro_rules! impl_from_index {
    ($($type:ty),*) => {
        $(
            impl From<$type> for PropertyKey {
                fn from(value: $type) -> Self {
                    Self::String(value.to_string().into())
                }
            }
        )*
    };
}

impl_from_index!(i8, u8, i16, u16, i32, u32, i64, u64, usize);
