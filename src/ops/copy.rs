//! Shallow copies

use crate::value::{
    Array, Function, Object, OwnProperties, Properties, Value,
};
use tracing::{instrument, trace};

/// A value that can be shallow-copied into a new allocation. Unlike [Clone],
/// which for `Arc`-backed values only clones the handle, a shallow copy
/// produces a distinct value whose own properties can diverge from the
/// original.
pub trait ShallowCopy {
    fn shallow_copy(&self) -> Self;
}

impl ShallowCopy for Object {
    /// New allocation with the same own properties and the same prototype
    fn shallow_copy(&self) -> Self {
        self.detach()
    }
}

impl ShallowCopy for Function {
    /// New allocation that runs the same body with the same receiver and
    /// arguments, and keeps the same name, prototype and own properties
    fn shallow_copy(&self) -> Self {
        self.detach()
    }
}

impl ShallowCopy for Array {
    fn shallow_copy(&self) -> Self {
        self.detach()
    }
}

impl ShallowCopy for Value {
    /// Copy the inner object/function/array. Primitives are immutable, so
    /// they're returned as-is.
    fn shallow_copy(&self) -> Self {
        match self {
            Self::Array(array) => Self::Array(array.shallow_copy()),
            Self::Object(object) => Self::Object(object.shallow_copy()),
            Self::Function(function) => {
                Self::Function(function.shallow_copy())
            }
            _ => self.clone(),
        }
    }
}

/// Shallow-copy a value, preserving what it _is_: a copied function is still
/// callable, and a copied object shares its original's prototype. Nested
/// values are shared, not copied.
///
/// ```
/// use petit_object::{copy, Function};
///
/// let double = Function::new(|_, args| Ok(args[0].clone() * 2.into()))
///     .insert("label", "double");
/// let copied = copy(&double);
/// assert!(!Function::ptr_eq(&double, &copied));
/// assert_eq!(copied.invoke(&[4.into()]).unwrap(), 8.into());
/// assert_eq!(copied.get("label"), "double".into());
/// ```
#[instrument(level = "trace", skip_all)]
pub fn copy<T: ShallowCopy>(value: &T) -> T {
    value.shallow_copy()
}

/// Copy all own properties (string and symbol keyed) into a new object with
/// no prototype. Unlike [copy], this strips behavior: copying a function
/// yields a plain object holding the function's properties.
pub fn object<M: OwnProperties + ?Sized>(properties: &M) -> Object {
    let properties: Properties = properties.own_properties().clone();
    trace!(len = properties.len(), "Copying properties to new object");
    properties.into()
}
