use crate::{
    error::Error,
    value::{OwnProperties, Properties, PropertyKey, Value},
};
use indexmap::IndexMap;
use std::{
    fmt::{self, Display},
    ops::Deref as _,
    sync::Arc,
};

/// An insertion-ordered key-value mapping, with an optional prototype.
///
/// Objects are immutable from the outside: every modifying method consumes
/// `self` and returns the modified object. Modifications use optimistic
/// mutation, meaning they mutate the backing map in place if there are no
/// other references to it, and only clone the contents if it's shared.
///
/// Objects created with [Object::new] (and every object returned by
/// [ops](crate::ops)) are null-rooted: they have no prototype, so a lookup
/// for a missing key is always undefined.
#[derive(Clone, Debug, Default)]
pub struct Object(Arc<ObjectInner>);

#[derive(Clone, Debug, Default)]
struct ObjectInner {
    properties: Properties,
    /// Shared with every object created from this one by
    /// [copy](crate::copy). Never duplicated.
    prototype: Option<Object>,
}

#[cfg(test)]
static_assertions::assert_impl_all!(Object: Send, Sync);

impl Object {
    /// Create an empty object with no prototype
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object that delegates missing lookups to `prototype`
    pub fn with_prototype(prototype: Object) -> Self {
        Self(Arc::new(ObjectInner {
            properties: Properties::new(),
            prototype: Some(prototype),
        }))
    }

    /// Get a value by key. If the key isn't defined on this object, the
    /// prototype chain is searched. Returns undefined if the key isn't found
    /// anywhere.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        self.lookup(&key.into())
    }

    /// Get a value defined directly on this object, ignoring the prototype
    pub fn get_own(&self, key: impl Into<PropertyKey>) -> Option<&Value> {
        self.0.properties.get(&key.into())
    }

    /// Is the key defined directly on this object?
    pub fn has_own(&self, key: impl Into<PropertyKey>) -> bool {
        self.0.properties.contains_key(&key.into())
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.0.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.properties.is_empty()
    }

    /// Iterate over own properties in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, PropertyKey, Value> {
        self.0.properties.iter()
    }

    /// Do these two handles point to the same allocation?
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Set a property. An existing key keeps its position; a new key is
    /// appended.
    pub fn insert(
        self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Self {
        self.with_inner(|inner| {
            inner.properties.insert(key.into(), value.into());
        })
    }

    /// Copy all own properties of another object onto this one, overwriting
    /// existing keys
    pub fn insert_all(self, other: Self) -> Self {
        // If we're the sole owner of the other object, we can move the items
        // out. Otherwise we have to clone them over
        match Arc::try_unwrap(other.0) {
            // If this object is empty, and we now own the other one, just point
            // to its map and avoid all copies
            Ok(other) if self.is_empty() => self
                .with_inner(|inner| inner.properties = other.properties),
            // We own the other one, so we can move each inner item into our
            // map without cloning
            Ok(other) => self
                .with_inner(|inner| inner.properties.extend(other.properties)),
            // Other object is shared - we need to clone all its contents
            Err(other) => self.with_inner(|inner| {
                inner.properties.extend(
                    other
                        .properties
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone())),
                )
            }),
        }
    }

    /// Look up a function by key (including through the prototype chain) and
    /// call it with this object as the receiver
    pub fn call_method(
        &self,
        key: impl Into<PropertyKey>,
        args: &[Value],
    ) -> Result<Value, Error> {
        let key = key.into();
        match self.lookup(&key) {
            Value::Function(function) => {
                function.call(&Value::Object(self.clone()), args)
            }
            other => Err(Error::NotCallable {
                key,
                actual: other.type_(),
            }),
        }
    }

    /// Walk the prototype chain for a key
    pub(crate) fn lookup(&self, key: &PropertyKey) -> Value {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(value) = object.0.properties.get(key) {
                return value.clone();
            }
            current = object.0.prototype.as_ref();
        }
        Value::Undefined
    }

    /// Allocate a new object with the same own properties and the same
    /// (shared) prototype
    pub(crate) fn detach(&self) -> Self {
        Self(Arc::new(self.0.deref().clone()))
    }

    /// Apply a mutation to the inner data, cloning it first only if it's shared
    fn with_inner(mut self, f: impl FnOnce(&mut ObjectInner)) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.0) {
            f(inner);
            self
        } else {
            let mut inner = self.0.deref().clone();
            f(&mut inner);
            Self(inner.into())
        }
    }
}

impl OwnProperties for Object {
    fn own_properties(&self) -> &Properties {
        &self.0.properties
    }

    fn prototype(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }
}

impl PartialEq for Object {
    /// Two objects are equal if they have the same own properties in the same
    /// order, and share the same prototype allocation (or both have none)
    fn eq(&self, other: &Self) -> bool {
        if Self::ptr_eq(self, other) {
            return true;
        }
        let same_prototype = match (&self.0.prototype, &other.0.prototype) {
            (None, None) => true,
            (Some(a), Some(b)) => Self::ptr_eq(a, b),
            _ => false,
        };
        same_prototype && self.iter().eq(other.iter())
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> From<IndexMap<K, V>> for Object {
    fn from(map: IndexMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Object> for Properties {
    fn from(object: Object) -> Self {
        Arc::unwrap_or_clone(object.0).properties
    }
}

impl<K: Into<PropertyKey>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let properties = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self(Arc::new(ObjectInner {
            properties,
            prototype: None,
        }))
    }
}

impl IntoIterator for Object {
    type Item = (PropertyKey, Value);
    type IntoIter = indexmap::map::IntoIter<PropertyKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        Properties::from(self).into_iter()
    }
}
