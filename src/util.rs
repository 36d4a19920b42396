use crate::Value;

/// Is the value something other than `null` or `undefined`? Handy as a
/// predicate for [filter_object_values](crate::filter_object_values).
pub fn not_null(value: &Value) -> bool {
    !value.is_nullish()
}
