use indexmap::indexmap;
use petit_object::{
    copy, entries, exclude_null, exclude_null_properties, exclude_object_keys,
    filter_object_keys, filter_object_values, filter_object_values_with, keys,
    map_object, map_object_values, merge_objects, merge_objects_with, object,
    Error, Function, Object, OwnProperties, PropertyKey, Symbol, Value,
};
use test_case::test_case;

/// A function with data attached to it. The body adds up its arguments, plus
/// the receiver's `offset` property if present.
fn callable() -> Function {
    Function::named("sum", |this, args| {
        let offset = this.get("offset").coalesce(0.into());
        Ok(args.iter().fold(offset, |acc, arg| acc + arg.clone()))
    })
    .insert("a", 1)
    .insert("label", "sum")
}

fn numbers() -> Object {
    indexmap! {"a" => 1, "b" => 2, "c" => 3, "d" => 17, "e" => 24}.into()
}

#[test]
fn test_merge_overwrite() {
    let a: Object = indexmap! {"a" => 1, "b" => 2}.into();
    let b: Object = indexmap! {"a" => 9}.into();
    let merged = merge_objects([&a, &b]);
    assert_eq!(merged, indexmap! {"a" => 9, "b" => 2}.into());
    assert_eq!(keys(&merged), vec!["a", "b"]);
}

#[test]
fn test_merge_chain() {
    let s = Symbol::new("s");
    let a = Object::new()
        .insert("a", 1)
        .insert("b", 2)
        .insert(s.clone(), false);
    let b = Object::new().insert("a", "hello").insert("c", 3);
    let c = Object::new().insert("a", true).insert("d", 4);
    let d = Object::new().insert("c", true).insert("d", 5);

    let merged = merge_objects([&a, &b, &c, &d]);
    assert_eq!(merged.get("a"), true.into());
    assert_eq!(merged.get("b"), 2.into());
    assert_eq!(merged.get("c"), true.into());
    assert_eq!(merged.get("d"), 5.into());
    assert_eq!(merged.get(&s), false.into());
    assert_eq!(merged.len(), 5);
    assert!(merged.prototype().is_none());
}

#[test]
fn test_merge_identity() {
    let a = Object::with_prototype(Object::new().insert("inherited", 0))
        .insert("a", 1)
        .insert(Symbol::new("s"), 2);
    let merged = merge_objects([&a]);
    assert_eq!(merged, object(&a));
    assert_eq!(merged.get("inherited"), Value::Undefined);
}

/// The late-bound argument is merged first, so captured objects win
#[test]
fn test_merge_curried_precedence() {
    let project = merge_objects_with([Object::new().insert("mode", "final")]);
    let base = Object::new().insert("mode", "draft").insert("title", "x");
    let merged = project(&base);
    assert_eq!(merged, indexmap! {"mode" => "final", "title" => "x"}.into());
    // Base is untouched
    assert_eq!(base.get("mode"), "draft".into());
}

#[test]
fn test_filter_values() {
    let even = |value: &Value| value.clone() % 2.into() == Value::from(0);
    assert_eq!(
        filter_object_values(&numbers(), even),
        indexmap! {"b" => 2, "e" => 24}.into()
    );
    assert_eq!(
        filter_object_values_with(even)(&numbers()),
        indexmap! {"b" => 2, "e" => 24}.into()
    );
}

#[test_case(|_| true; "all")]
#[test_case(|_| false; "none")]
#[test_case(|key| key < "c"; "prefix")]
#[test_case(|key| key == "b" || key == "e"; "scattered")]
fn test_filter_exclude_partition(predicate: fn(&str) -> bool) {
    let object = numbers().insert(Symbol::new("s"), 0);
    let kept = keys(&filter_object_keys(&object, predicate));
    let dropped = keys(&exclude_object_keys(&object, predicate));
    assert!(kept.iter().all(|key| !dropped.contains(key)));
    let mut union = [kept, dropped].concat();
    union.sort();
    assert_eq!(union, keys(&object));
}

#[test]
fn test_map_values() {
    let object: Object = indexmap! {"a" => 1, "b" => 2}.into();
    let mapped = map_object_values(&object, |value, _| value + 1.into());
    assert_eq!(mapped, indexmap! {"a" => 2, "b" => 3}.into());
    assert_eq!(keys(&mapped), vec!["a", "b"]);
}

#[test]
fn test_map_object_error_propagates() {
    let object: Object = indexmap! {"a" => 1, "b" => 2}.into();
    let result = petit_object::try_map_object(&object, |key, value| {
        if key == "b" {
            Err(Error::Thrown(value))
        } else {
            Ok((key, value))
        }
    });
    assert!(
        matches!(result, Err(Error::Thrown(value)) if value == 2.into())
    );
}

#[test]
fn test_map_object_to_symbols() {
    let object: Object = indexmap! {"a" => 1}.into();
    let symbol = Symbol::new("a");
    let mapped = map_object(&object, |_, value| (symbol.clone(), value));
    assert_eq!(mapped.get(&symbol), 1.into());
    // Symbol keys aren't enumerable by string key
    assert!(keys(&mapped).is_empty());
    assert!(entries(&mapped).is_empty());
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
fn test_object_strips_callable() {
    let function = callable();
    let stripped: Value = object(&function).into();
    assert!(matches!(stripped, Value::Object(_)));
    assert_eq!(stripped.get("a"), 1.into());
    assert_eq!(stripped.get("label"), "sum".into());
    assert!(matches!(
        stripped.try_into_function(),
        Err(petit_object::ValueError::Type { .. })
    ));
}

#[test_case(&[], 0; "no_args")]
#[test_case(&[1, 2], 3; "args")]
fn test_copy_keeps_callable(args: &[i32], expected: i32) {
    let function = callable();
    let copied = copy(&function);
    let args: Vec<Value> = args.iter().copied().map(Value::from).collect();

    assert!(!Function::ptr_eq(&function, &copied));
    assert_eq!(
        copied.invoke(&args).unwrap(),
        function.invoke(&args).unwrap()
    );
    assert_eq!(copied.invoke(&args).unwrap(), expected.into());
    assert_eq!(entries(&copied), entries(&function));
}

/// The receiver is forwarded to the copied body
#[test]
fn test_copy_forwards_receiver() {
    let copied = copy(&callable());
    let receiver: Value = Object::new().insert("offset", 10).into();
    assert_eq!(copied.call(&receiver, &[1.into()]).unwrap(), 11.into());
}

/// Copies can also be called as methods through an object
#[test]
fn test_copy_as_method() {
    let holder = Object::new()
        .insert("offset", 100)
        .insert("sum", copy(&callable()));
    assert_eq!(holder.call_method("sum", &[1.into()]).unwrap(), 101.into());
    assert!(matches!(
        holder.call_method("offset", &[]),
        Err(Error::NotCallable { key: PropertyKey::String(_), .. })
    ));
}

#[test]
fn test_copy_value() {
    let value: Value = numbers().into();
    let copied = copy(&value);
    assert_eq!(copied, value);
    let (Value::Object(original), Value::Object(copied)) = (&value, &copied)
    else {
        panic!("Expected objects")
    };
    assert!(!Object::ptr_eq(original, copied));
}
