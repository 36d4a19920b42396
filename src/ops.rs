//! Pure functions over objects.
//!
//! None of these mutate their input. Each one allocates and returns a fresh
//! [Object] (or vec), sharing nested values with the input by reference.
//!
//! Functions that take an `&M` accept anything implementing
//! [OwnProperties](crate::OwnProperties): an [Object], a
//! [Function](crate::Function), or a bare [Properties](crate::Properties) map.
//!
//! Most functions come in up to three forms:
//! - `map_object(&object, f)` - apply directly
//! - `map_object_with(f)` - curried; returns a reusable
//!   `Fn(&dyn OwnProperties) -> Object`
//! - `try_map_object(&object, f)` - `f` is fallible, and the first error is
//!   returned as-is
//!
//! [Object]: crate::Object

mod copy;
mod enumerate;
mod filter;
mod map;
mod merge;

pub use copy::{copy, object, ShallowCopy};
pub use enumerate::{entries, keys, values};
pub use filter::{
    exclude_null, exclude_null_properties, exclude_object,
    exclude_object_keys, exclude_object_keys_with, exclude_object_values,
    exclude_object_values_with, exclude_object_with, filter_object,
    filter_object_keys, filter_object_keys_with, filter_object_values,
    filter_object_values_with, filter_object_with, try_filter_object,
};
pub use map::{
    map_object, map_object_keys, map_object_keys_with, map_object_values,
    map_object_values_with, map_object_with, try_map_object,
    try_map_object_keys, try_map_object_values,
};
pub use merge::{merge_objects, merge_objects_with};
