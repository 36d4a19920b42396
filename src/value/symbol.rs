use crate::value::PetitString;
use std::{
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A unique, opaque token that can be used as a property key. Two symbols are
/// equal only if one is a clone of the other; the description is purely
/// informational, so `Symbol::new("a") != Symbol::new("a")`.
#[derive(Clone)]
pub struct Symbol(Arc<SymbolInner>);

struct SymbolInner {
    description: Option<PetitString>,
}

impl Symbol {
    /// Create a new symbol with a description
    pub fn new(description: impl Into<PetitString>) -> Self {
        Self(Arc::new(SymbolInner {
            description: Some(description.into()),
        }))
    }

    /// Create a new symbol with no description
    pub fn anonymous() -> Self {
        Self(Arc::new(SymbolInner { description: None }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Symbol").field(&self.description()).finish()
    }
}
