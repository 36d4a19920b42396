//! Pure utilities for working with ordered key-value objects: copying,
//! merging, mapping and filtering.
//!
//! The data model is a small dynamic [Value] type. The interesting parts are
//! [Object], an insertion-ordered map with an optional prototype, and
//! [Function], a callable value that can also carry properties. All the
//! operations in [ops] are pure: they never mutate their input, and always
//! return a fresh object.
//!
//! ```
//! use petit_object::{filter_object_values, map_object_values, Object, Value};
//!
//! let object = Object::new()
//!     .insert("a", 1)
//!     .insert("b", Value::Null)
//!     .insert("c", 3);
//! let present = filter_object_values(&object, |value| !value.is_nullish());
//! let doubled = map_object_values(&present, |value, _| value * 2.into());
//! assert_eq!(doubled, Object::new().insert("a", 2).insert("c", 6));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]

pub mod error;
pub mod ops;
mod util;
mod value;

pub use crate::{
    error::{Error, ValueError},
    ops::{
        copy, entries, exclude_null, exclude_null_properties, exclude_object,
        exclude_object_keys, exclude_object_keys_with, exclude_object_values,
        exclude_object_values_with, exclude_object_with, filter_object,
        filter_object_keys, filter_object_keys_with, filter_object_values,
        filter_object_values_with, filter_object_with, keys, map_object,
        map_object_keys, map_object_keys_with, map_object_values,
        map_object_values_with, map_object_with, merge_objects,
        merge_objects_with, object, try_filter_object, try_map_object,
        try_map_object_keys, try_map_object_values, values, ShallowCopy,
    },
    util::not_null,
    value::{
        Array, Function, Number, Object, OwnProperties, PetitString,
        Properties, PropertyKey, Symbol, Value, ValueType,
    },
};
