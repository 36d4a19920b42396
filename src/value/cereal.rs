//! Serde-related implementations. Serialization follows `JSON.stringify`:
//! object properties with symbol keys or undefined values are skipped, and
//! values that have no data representation (functions and symbols) are an
//! error.

use crate::value::{Array, Number, Object, PetitString, PropertyKey, Value};
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{self, SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // undefined => (), null => None
            Value::Undefined => serializer.serialize_unit(),
            Value::Null => serializer.serialize_none(),
            Value::Boolean(b) => b.serialize(serializer),
            Value::Number(number) => number.serialize(serializer),
            Value::String(string) => string.serialize(serializer),
            Value::Array(array) => array.serialize(serializer),
            Value::Object(object) => object.serialize(serializer),
            Value::Symbol(symbol) => Err(ser::Error::custom(format_args!(
                "{symbol} cannot be serialized"
            ))),
            Value::Function(function) => Err(ser::Error::custom(
                format_args!("{function} cannot be serialized"),
            )),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let serializable = || {
            self.iter().filter_map(|(key, value)| match (key, value) {
                (PropertyKey::Symbol(_), _) | (_, Value::Undefined) => None,
                (PropertyKey::String(key), value) => Some((key, value)),
            })
        };
        let mut map = serializer.serialize_map(Some(serializable().count()))?;
        for (key, value) in serializable() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Int(i) => i.serialize(serializer),
            Number::Float(f) => f.serialize(serializer),
        }
    }
}

impl Serialize for PetitString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "any value")
            }

            // Most formats can't distinguish unit from none, so both become
            // null. Undefined never round trips.
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_some<D>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_bool<E>(self, b: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Boolean(b))
            }

            fn visit_i64<E>(self, i: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Number(i.into()))
            }

            fn visit_u64<E>(self, i: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                NumberVisitor.visit_u64(i).map(Value::Number)
            }

            fn visit_f64<E>(self, f: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Number(f.into()))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::String(v.into()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::String(v.into()))
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                ArrayVisitor.visit_seq(seq).map(Value::Array)
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                ObjectVisitor.visit_map(map).map(Value::Object)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ObjectVisitor;

impl<'de> Visitor<'de> for ObjectVisitor {
    type Value = Object;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Object::new();
        while let Some((key, value)) =
            map.next_entry::<PetitString, Value>()?
        {
            object = object.insert(key, value);
        }
        Ok(object)
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ObjectVisitor)
    }
}

struct ArrayVisitor;

impl<'de> Visitor<'de> for ArrayVisitor {
    type Value = Array;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element::<Value>()? {
            elements.push(element);
        }
        Ok(elements.into())
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ArrayVisitor)
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a number")
    }

    fn visit_i64<E>(self, i: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(i.into())
    }

    fn visit_u64<E>(self, i: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // Too big for an int; lose some precision instead of failing
        Ok(Number::try_from(i).unwrap_or(Number::Float(i as f64)))
    }

    fn visit_f64<E>(self, f: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(f.into())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumberVisitor)
    }
}

impl<'de> Deserialize<'de> for PetitString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(PetitString::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, Symbol};

    #[test]
    fn serialize_object() {
        let object = Object::new()
            .insert("a", 1)
            .insert("b", "two")
            .insert("c", Value::Null)
            .insert("d", Value::Undefined)
            .insert(Symbol::new("s"), 4)
            .insert("e", vec![Value::from(1.5), true.into()]);
        assert_eq!(
            serde_json::to_string(&object).unwrap(),
            r#"{"a":1,"b":"two","c":null,"e":[1.5,true]}"#
        );
    }

    #[test]
    fn serialize_function_error() {
        let value: Value = Function::new(|_, _| Ok(Value::Undefined)).into();
        assert!(serde_json::to_string(&value).is_err());
        let value: Value = Symbol::new("s").into();
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn deserialize() {
        let value: Value = serde_json::from_str(
            r#"{
                "b": 1,
                "a": [null, 2.5, "x"],
                "c": {"d": false},
                "big": 18446744073709551615
            }"#,
        )
        .unwrap();
        // Order is preserved from the input
        let expected = Object::new()
            .insert("b", 1)
            .insert("a", vec![Value::Null, 2.5.into(), "x".into()])
            .insert("c", Object::new().insert("d", false))
            .insert("big", u64::MAX as f64);
        assert_eq!(value, expected.into());
    }

    #[test]
    fn deserialize_typed() {
        let object: Object = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(object, Object::new().insert("a", 1));
        assert!(serde_json::from_str::<Object>("[1]").is_err());
        let array: Array = serde_json::from_str("[1, true]").unwrap();
        assert_eq!(array, vec![Value::from(1), true.into()].into());
    }
}
