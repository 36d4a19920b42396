use crate::value::{Object, PropertyKey, Value};
use indexmap::IndexMap;

/// An insertion-ordered map of properties. Re-inserting an existing key
/// replaces its value without moving it.
pub type Properties = IndexMap<PropertyKey, Value>;

/// Anything that holds its own properties, and optionally delegates missing
/// lookups to a prototype. This is the input bound for every function in
/// [ops](crate::ops).
pub trait OwnProperties {
    /// Properties defined directly on this value, in insertion order. This
    /// does _not_ include anything inherited from the prototype.
    fn own_properties(&self) -> &Properties;

    /// The object that missing lookups are delegated to, if any
    fn prototype(&self) -> Option<&Object> {
        None
    }
}

impl OwnProperties for Properties {
    fn own_properties(&self) -> &Properties {
        self
    }
}

impl<T: OwnProperties + ?Sized> OwnProperties for &T {
    fn own_properties(&self) -> &Properties {
        (**self).own_properties()
    }

    fn prototype(&self) -> Option<&Object> {
        (**self).prototype()
    }
}
