//! Transform the keys and/or values of an object.
//!
//! These only visit own string-keyed properties, in insertion order. The
//! result is always a new object with no prototype.

use crate::{
    ops::enumerate::string_entries,
    value::{Object, OwnProperties, PetitString, PropertyKey, Value},
};

/// Map each `(key, value)` entry to a new entry. The mapping function can
/// return any kind of key, including a symbol. If two entries map to the same
/// key, the later one wins, but the key stays where it was first produced.
///
/// ```
/// use petit_object::{keys, map_object, Object};
///
/// let object = Object::new().insert("a", 1).insert("b", 2);
/// let swapped = map_object(&object, |key, value| (value.to_string(), key));
/// assert_eq!(swapped, Object::new().insert("1", "a").insert("2", "b"));
/// ```
pub fn map_object<M, F, K, V>(object: &M, mut f: F) -> Object
where
    M: OwnProperties + ?Sized,
    F: FnMut(PetitString, Value) -> (K, V),
    K: Into<PropertyKey>,
    V: Into<Value>,
{
    string_entries(object)
        .map(|(key, value)| f(key.clone(), value.clone()))
        .collect()
}

/// Fallible version of [map_object]. Stops at the first error and returns
/// it unchanged.
pub fn try_map_object<M, F, K, V, E>(
    object: &M,
    mut f: F,
) -> Result<Object, E>
where
    M: OwnProperties + ?Sized,
    F: FnMut(PetitString, Value) -> Result<(K, V), E>,
    K: Into<PropertyKey>,
    V: Into<Value>,
{
    string_entries(object)
        .map(|(key, value)| f(key.clone(), value.clone()))
        .collect()
}

/// Curried form of [map_object]
pub fn map_object_with<F, K, V>(
    f: F,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    F: Fn(PetitString, Value) -> (K, V),
    K: Into<PropertyKey>,
    V: Into<Value>,
{
    move |object: &dyn OwnProperties| map_object(object, &f)
}

/// Map each key to a new key, keeping values as-is. Colliding keys follow the
/// same rule as [map_object]: later value, earlier position.
pub fn map_object_keys<M, F, K>(object: &M, mut f: F) -> Object
where
    M: OwnProperties + ?Sized,
    F: FnMut(PetitString) -> K,
    K: Into<PropertyKey>,
{
    map_object(object, |key, value| (f(key), value))
}

/// Fallible version of [map_object_keys]
pub fn try_map_object_keys<M, F, K, E>(
    object: &M,
    mut f: F,
) -> Result<Object, E>
where
    M: OwnProperties + ?Sized,
    F: FnMut(PetitString) -> Result<K, E>,
    K: Into<PropertyKey>,
{
    try_map_object(object, |key, value| Ok((f(key)?, value)))
}

/// Curried form of [map_object_keys]
pub fn map_object_keys_with<F, K>(
    f: F,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    F: Fn(PetitString) -> K,
    K: Into<PropertyKey>,
{
    move |object: &dyn OwnProperties| map_object_keys(object, &f)
}

/// Map each value to a new value, keeping keys as-is. The mapping function
/// also receives the key. The output has exactly the same keys, in the same
/// order, as the input's string keys.
///
/// ```
/// use petit_object::{map_object_values, Object};
///
/// let object = Object::new().insert("a", 1).insert("b", 2);
/// let incremented = map_object_values(&object, |value, _| value + 1.into());
/// assert_eq!(incremented, Object::new().insert("a", 2).insert("b", 3));
/// ```
pub fn map_object_values<M, F, V>(object: &M, mut f: F) -> Object
where
    M: OwnProperties + ?Sized,
    F: FnMut(Value, PetitString) -> V,
    V: Into<Value>,
{
    map_object(object, |key, value| (key.clone(), f(value, key)))
}

/// Fallible version of [map_object_values]
pub fn try_map_object_values<M, F, V, E>(
    object: &M,
    mut f: F,
) -> Result<Object, E>
where
    M: OwnProperties + ?Sized,
    F: FnMut(Value, PetitString) -> Result<V, E>,
    V: Into<Value>,
{
    try_map_object(object, |key, value| Ok((key.clone(), f(value, key)?)))
}

/// Curried form of [map_object_values]
pub fn map_object_values_with<F, V>(
    f: F,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    F: Fn(Value, PetitString) -> V,
    V: Into<Value>,
{
    move |object: &dyn OwnProperties| map_object_values(object, &f)
}
