use crate::value::Value;
use std::{
    fmt::{self, Display},
    ops::Deref,
    sync::Arc,
};

/// An immutable, reference-counted list of values.
///
/// Like [Object](crate::Object), modifying methods consume `self` and only
/// clone the contents if the backing vec is shared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array(Arc<Vec<Value>>);

impl Array {
    /// Append a single value to the end of the array.
    pub fn push(self, value: impl Into<Value>) -> Self {
        self.with_inner(|vec| vec.push(value.into()))
    }

    /// Do these two handles point to the same allocation?
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Allocate a new array holding the same elements
    pub(crate) fn detach(&self) -> Self {
        Self(Arc::new(self.0.deref().clone()))
    }

    fn with_inner(mut self, f: impl FnOnce(&mut Vec<Value>)) -> Self {
        if let Some(vec) = Arc::get_mut(&mut self.0) {
            // If we're the only owner of the arc, we can mutate in place
            f(vec);
            self
        } else {
            // The arc is aliased; we have to clone the contents before mutating
            let mut vec = self.0.deref().clone();
            f(&mut vec);
            Self(vec.into())
        }
    }
}

impl Deref for Array {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().map(T::into).collect()
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        Arc::unwrap_or_clone(array.0)
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = <Vec<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.0).into_iter()
    }
}
