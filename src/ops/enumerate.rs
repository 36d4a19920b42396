//! Extract keys, values and entries from an object.
//!
//! Like `Object.keys` and friends, these only look at own string-keyed
//! properties. Symbol keys and the prototype chain are ignored.

use crate::value::{OwnProperties, PetitString, Value};

/// Own string-keyed properties in insertion order. Every string-keyed
/// operation is built on this.
pub(crate) fn string_entries<M>(
    object: &M,
) -> impl Iterator<Item = (&PetitString, &Value)>
where
    M: OwnProperties + ?Sized,
{
    object
        .own_properties()
        .iter()
        .filter_map(|(key, value)| Some((key.as_string()?, value)))
}

/// Get the keys of an object, in insertion order
/// <https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Object/keys>
pub fn keys<M: OwnProperties + ?Sized>(object: &M) -> Vec<PetitString> {
    string_entries(object).map(|(key, _)| key.clone()).collect()
}

/// Get the values of an object, in the same order as [keys]
/// <https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Object/values>
pub fn values<M: OwnProperties + ?Sized>(object: &M) -> Vec<Value> {
    string_entries(object).map(|(_, value)| value.clone()).collect()
}

/// Get the `(key, value)` pairs of an object, in insertion order
/// <https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Object/entries>
pub fn entries<M: OwnProperties + ?Sized>(
    object: &M,
) -> Vec<(PetitString, Value)> {
    string_entries(object)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
