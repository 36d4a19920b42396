//! Merge multiple objects into one

use crate::value::{Object, OwnProperties, Properties};
use std::iter;
use tracing::{instrument, trace};

/// Merge the own properties (string and symbol keyed) of every object into a
/// new object with no prototype. If a key appears in more than one object, the
/// _last_ value wins, but the key stays in the position where it first
/// appeared. Merging zero objects yields an empty object.
///
/// ```
/// use indexmap::indexmap;
/// use petit_object::{keys, merge_objects, Object};
///
/// let defaults: Object = indexmap! {"a" => 1, "b" => 2}.into();
/// let overrides: Object = indexmap! {"a" => 9}.into();
/// let merged = merge_objects([&defaults, &overrides]);
/// assert_eq!(merged, indexmap! {"a" => 9, "b" => 2}.into());
/// assert_eq!(keys(&merged), vec!["a", "b"]);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn merge_objects<'a, M, I>(objects: I) -> Object
where
    M: 'a + OwnProperties + ?Sized,
    I: IntoIterator<Item = &'a M>,
{
    merge_properties(objects.into_iter().map(M::own_properties))
}

/// Curried form of [merge_objects]. Capture a list of objects, and get back a
/// function that merges its argument _under_ them: the argument goes first,
/// then the captured objects, so captured values win any conflicts. This is
/// the "project final values over a base" pattern. Like [merge_objects], the
/// captured values can be anything with [OwnProperties]; their properties are
/// copied at capture time.
///
/// ```
/// use petit_object::{keys, merge_objects_with, Object};
///
/// let force_enabled =
///     merge_objects_with([Object::new().insert("enabled", true)]);
/// let config = Object::new().insert("enabled", false).insert("port", 80);
/// let forced = force_enabled(&config);
/// assert_eq!(
///     forced,
///     Object::new().insert("enabled", true).insert("port", 80)
/// );
/// assert_eq!(keys(&forced), vec!["enabled", "port"]);
/// ```
pub fn merge_objects_with<M, I>(
    objects: I,
) -> impl Fn(&dyn OwnProperties) -> Object
where
    M: OwnProperties,
    I: IntoIterator<Item = M>,
{
    let overrides: Vec<Properties> = objects
        .into_iter()
        .map(|object| object.own_properties().clone())
        .collect();
    move |base: &dyn OwnProperties| {
        merge_properties(iter::once(base.own_properties()).chain(&overrides))
    }
}

/// Insert every property from each map in order. `IndexMap` insertion already
/// gives us last-wins values with first-occurrence ordering.
fn merge_properties<'a>(
    sources: impl Iterator<Item = &'a Properties>,
) -> Object {
    let merged: Object = sources
        .flat_map(|properties| properties.iter())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    trace!(len = merged.len(), "Merged objects");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys, object, Function, PropertyKey, Symbol, Value};
    use indexmap::indexmap;

    #[test]
    fn overwrite() {
        let a: Object = indexmap! {"a" => 1, "b" => 2}.into();
        let b: Object = indexmap! {"a" => 9}.into();
        let merged = merge_objects([&a, &b]);
        assert_eq!(merged, indexmap! {"a" => 9, "b" => 2}.into());
        assert_eq!(keys(&merged), vec!["a", "b"]);
    }

    #[test]
    fn chain() {
        let s = Symbol::new("s");
        let a = Object::new()
            .insert("a", 1)
            .insert("b", 2)
            .insert(s.clone(), false);
        let b = Object::new().insert("a", "hello").insert("c", 3);
        let c = Object::new().insert("a", true).insert("d", 4);
        let d = Object::new().insert("c", true).insert("d", 5);

        let merged = merge_objects([&a, &b, &c, &d]);
        let expected = Object::new()
            .insert("a", true)
            .insert("b", 2)
            .insert(s.clone(), false)
            .insert("c", true)
            .insert("d", 5);
        assert_eq!(merged, expected);
        assert_eq!(keys(&merged), vec!["a", "b", "c", "d"]);
        assert_eq!(merged.get(&s), false.into());
    }

    #[test]
    fn single_is_copy() {
        let a = Object::with_prototype(Object::new().insert("x", 0))
            .insert("a", 1)
            .insert(Symbol::new("s"), 2);
        let merged = merge_objects([&a]);
        assert_eq!(merged, object(&a));
        assert!(merged.prototype().is_none());
    }

    #[test]
    fn empty() {
        assert!(merge_objects::<Object, _>([]).is_empty());
    }

    #[test]
    fn does_not_mutate_inputs() {
        let a = Object::new().insert("a", 1);
        let b = Object::new().insert("a", 2);
        merge_objects([&a, &b]);
        assert_eq!(a.get("a"), 1.into());
        assert_eq!(b.get("a"), 2.into());
    }

    #[test]
    fn function_properties() {
        let function =
            Function::new(|_, _| Ok(Value::Undefined)).insert("f", 1);
        let merged = merge_objects([&function]);
        assert_eq!(merged, Object::new().insert("f", 1));
    }

    #[test]
    fn curried_precedence() {
        let overrides = merge_objects_with([
            Object::new().insert("a", "override").insert("c", 3),
            Object::new().insert("c", "last"),
        ]);
        let base = Object::new().insert("a", "base").insert("b", "base");
        let merged = overrides(&base);
        // Captured objects win over the late-bound argument, and the
        // argument's keys come first
        assert_eq!(
            merged,
            indexmap! {"a" => "override", "b" => "base", "c" => "last"}.into()
        );
        // Reusable
        assert_eq!(overrides(&Object::new()).get("a"), "override".into());
    }

    #[test]
    fn curried_captures_any_properties() {
        let function =
            Function::new(|_, _| Ok(Value::Undefined)).insert("a", "function");
        let properties: Properties =
            indexmap! {PropertyKey::from("b") => Value::from("map")};
        let base = Object::new().insert("a", 1).insert("b", 2).insert("c", 3);

        let merged = merge_objects_with([&function])(&base);
        assert_eq!(
            merged,
            Object::new().insert("a", "function").insert("b", 2).insert("c", 3)
        );
        assert!(merged.prototype().is_none());
        assert_eq!(
            merge_objects_with([properties])(&base),
            Object::new().insert("a", 1).insert("b", "map").insert("c", 3)
        );
    }
}
