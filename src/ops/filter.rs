//! Select a subset of an object's entries.
//!
//! Predicates are called exactly once per own string-keyed entry, in
//! insertion order, and surviving entries keep their relative order. Every
//! `filter_*` function has an `exclude_*` counterpart that keeps the entries
//! the predicate rejects.

use crate::{
    ops::enumerate::string_entries,
    util::not_null,
    value::{Object, OwnProperties, Value},
};

/// Keep entries where `predicate(key, value)` is true
pub fn filter_object<M, P>(object: &M, mut predicate: P) -> Object
where
    M: OwnProperties + ?Sized,
    P: FnMut(&str, &Value) -> bool,
{
    string_entries(object)
        .filter(|(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Fallible version of [filter_object]. Stops at the first error and returns
/// it unchanged.
pub fn try_filter_object<M, P, E>(
    object: &M,
    mut predicate: P,
) -> Result<Object, E>
where
    M: OwnProperties + ?Sized,
    P: FnMut(&str, &Value) -> Result<bool, E>,
{
    string_entries(object)
        .filter_map(|(key, value)| match predicate(key, value) {
            Ok(true) => Some(Ok((key.clone(), value.clone()))),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        })
        .collect()
}

/// Curried form of [filter_object]
pub fn filter_object_with<P>(
    predicate: P,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    P: Fn(&str, &Value) -> bool,
{
    move |object: &dyn OwnProperties| filter_object(object, &predicate)
}

/// Drop entries where `predicate(key, value)` is true
pub fn exclude_object<M, P>(object: &M, mut predicate: P) -> Object
where
    M: OwnProperties + ?Sized,
    P: FnMut(&str, &Value) -> bool,
{
    filter_object(object, |key, value| !predicate(key, value))
}

/// Curried form of [exclude_object]
pub fn exclude_object_with<P>(
    predicate: P,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    P: Fn(&str, &Value) -> bool,
{
    move |object: &dyn OwnProperties| exclude_object(object, &predicate)
}

/// Keep entries whose key passes the predicate
pub fn filter_object_keys<M, P>(object: &M, mut predicate: P) -> Object
where
    M: OwnProperties + ?Sized,
    P: FnMut(&str) -> bool,
{
    filter_object(object, |key, _| predicate(key))
}

/// Curried form of [filter_object_keys]
pub fn filter_object_keys_with<P>(
    predicate: P,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    P: Fn(&str) -> bool,
{
    move |object: &dyn OwnProperties| filter_object_keys(object, &predicate)
}

/// Drop entries whose key passes the predicate
pub fn exclude_object_keys<M, P>(object: &M, mut predicate: P) -> Object
where
    M: OwnProperties + ?Sized,
    P: FnMut(&str) -> bool,
{
    filter_object(object, |key, _| !predicate(key))
}

/// Curried form of [exclude_object_keys]
pub fn exclude_object_keys_with<P>(
    predicate: P,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    P: Fn(&str) -> bool,
{
    move |object: &dyn OwnProperties| exclude_object_keys(object, &predicate)
}

/// Keep entries whose value passes the predicate
///
/// ```
/// use indexmap::indexmap;
/// use petit_object::{filter_object_values, Object, Value};
///
/// let object: Object =
///     indexmap! {"a" => 1, "b" => 2, "c" => 3, "d" => 17, "e" => 24}.into();
/// let even = filter_object_values(&object, |value| {
///     value.clone() % 2.into() == Value::from(0)
/// });
/// assert_eq!(even, indexmap! {"b" => 2, "e" => 24}.into());
/// ```
pub fn filter_object_values<M, P>(object: &M, mut predicate: P) -> Object
where
    M: OwnProperties + ?Sized,
    P: FnMut(&Value) -> bool,
{
    filter_object(object, |_, value| predicate(value))
}

/// Curried form of [filter_object_values]
pub fn filter_object_values_with<P>(
    predicate: P,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    P: Fn(&Value) -> bool,
{
    move |object: &dyn OwnProperties| filter_object_values(object, &predicate)
}

/// Drop entries whose value passes the predicate
pub fn exclude_object_values<M, P>(object: &M, mut predicate: P) -> Object
where
    M: OwnProperties + ?Sized,
    P: FnMut(&Value) -> bool,
{
    filter_object(object, |_, value| !predicate(value))
}

/// Curried form of [exclude_object_values]
pub fn exclude_object_values_with<P>(
    predicate: P,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    P: Fn(&Value) -> bool,
{
    move |object: &dyn OwnProperties| {
        exclude_object_values(object, &predicate)
    }
}

/// Drop every entry whose value is `null` or `undefined`
///
/// ```
/// use petit_object::{exclude_null_properties, keys, Object, Value};
///
/// let object = Object::new()
///     .insert("a", 1)
///     .insert("b", Value::Null)
///     .insert("c", 3)
///     .insert("e", Value::Undefined);
/// assert_eq!(keys(&exclude_null_properties(&object)), vec!["a", "c"]);
/// ```
pub fn exclude_null_properties<M>(object: &M) -> Object
where
    M: OwnProperties + ?Sized,
{
    filter_object_values(object, not_null)
}

/// Alias for [exclude_null_properties]
pub fn exclude_null<M>(object: &M) -> Object
where
    M: OwnProperties + ?Sized,
{
    exclude_null_properties(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys, Symbol};
    use indexmap::indexmap;
    use test_case::test_case;

    fn numbers() -> Object {
        indexmap! {"a" => 1, "b" => 2, "c" => 3, "d" => 17, "e" => 24}.into()
    }

    fn is_even(value: &Value) -> bool {
        value.clone() % 2.into() == Value::from(0)
    }

    fn is_big(value: &Value) -> bool {
        matches!(value, Value::Number(number) if number.to_f64() > 10.0)
    }

    #[test]
    fn test_filter_object_values() {
        assert_eq!(
            filter_object_values(&numbers(), is_even),
            indexmap! {"b" => 2, "e" => 24}.into()
        );
        assert_eq!(
            exclude_object_values(&numbers(), is_even),
            indexmap! {"a" => 1, "c" => 3, "d" => 17}.into()
        );
    }

    #[test]
    fn test_filter_object() {
        let filtered =
            filter_object(&numbers(), |key, value| key > "b" && is_even(value));
        assert_eq!(filtered, indexmap! {"e" => 24}.into());
        let excluded = exclude_object(&numbers(), |key, value| {
            key > "b" && is_even(value)
        });
        assert_eq!(keys(&excluded), vec!["a", "b", "c", "d"]);
    }

    #[test_case(&["a", "c"], &["b", "d", "e"]; "some")]
    #[test_case(&[], &["a", "b", "c", "d", "e"]; "none")]
    #[test_case(&["a", "b", "c", "d", "e"], &[]; "all")]
    fn test_filter_object_keys(included: &[&str], excluded: &[&str]) {
        let predicate = |key: &str| included.iter().any(|k| *k == key);
        assert_eq!(keys(&filter_object_keys(&numbers(), predicate)), included);
        assert_eq!(keys(&exclude_object_keys(&numbers(), predicate)), excluded);
    }

    #[test]
    fn symbols_are_skipped() {
        let object = numbers().insert(Symbol::new("s"), 2);
        let mut calls = 0;
        let filtered = filter_object(&object, |_, _| {
            calls += 1;
            true
        });
        assert_eq!(calls, 5);
        assert_eq!(filtered, numbers());
    }

    #[test]
    fn visit_order() {
        let mut visited = Vec::new();
        filter_object_keys(&numbers(), |key| {
            visited.push(key.to_owned());
            false
        });
        assert_eq!(visited, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_exclude_null_properties() {
        let object = Object::new()
            .insert("a", 1)
            .insert("b", Value::Null)
            .insert("c", 3)
            .insert("d", 4)
            .insert("e", Value::Undefined);
        let expected: Object = indexmap! {"a" => 1, "c" => 3, "d" => 4}.into();
        assert_eq!(exclude_null_properties(&object), expected);
        assert_eq!(exclude_null(&object), expected);
    }

    #[test]
    fn falsy_values_survive_null_exclusion() {
        let object = Object::new()
            .insert("zero", 0)
            .insert("empty", "")
            .insert("false", false);
        assert_eq!(exclude_null_properties(&object), object);
    }

    #[test]
    fn curried() {
        let even = filter_object_values_with(is_even);
        let odd = exclude_object_values_with(is_even);
        let vowels = filter_object_keys_with(|key| "aeiou".contains(key));
        let consonants = exclude_object_keys_with(|key| "aeiou".contains(key));
        let big = filter_object_with(|_, value| is_big(value));
        let small = exclude_object_with(|_, value| is_big(value));

        assert_eq!(keys(&even(&numbers())), vec!["b", "e"]);
        assert_eq!(keys(&odd(&numbers())), vec!["a", "c", "d"]);
        assert_eq!(keys(&vowels(&numbers())), vec!["a", "e"]);
        assert_eq!(keys(&consonants(&numbers())), vec!["b", "c", "d"]);
        assert_eq!(keys(&big(&numbers())), vec!["d", "e"]);
        assert_eq!(keys(&small(&numbers())), vec!["a", "b", "c"]);
    }

    #[test]
    fn try_filter() {
        let result: Result<Object, String> =
            try_filter_object(&numbers(), |key, value| {
                if key == "d" {
                    Err(format!("rejected {value}"))
                } else {
                    Ok(is_even(value))
                }
            });
        assert_eq!(result, Err("rejected 17".to_owned()));

        let result: Result<Object, String> =
            try_filter_object(&numbers(), |_, value| Ok(is_even(value)));
        assert_eq!(result, Ok(indexmap! {"b" => 2, "e" => 24}.into()));
    }
}
