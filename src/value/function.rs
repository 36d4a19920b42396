use crate::{
    error::Error,
    value::{Object, OwnProperties, PetitString, Properties, PropertyKey, Value},
};
use std::{
    fmt::{self, Debug, Display},
    ops::Deref as _,
    sync::Arc,
};

/// The callable part of a function. Receives the calling context (`this`) and
/// the positional arguments.
type Body =
    dyn Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync;

/// A callable value. Like an object, a function can carry its own properties
/// and a prototype, which are independent of its body.
///
/// Cloning a `Function` clones the handle; both clones refer to the same
/// allocation. Use [copy](crate::copy) to get a new allocation that shares the
/// body but has its own properties.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

#[derive(Clone)]
struct FunctionInner {
    name: Option<PetitString>,
    body: Arc<Body>,
    properties: Properties,
    prototype: Option<Object>,
}

#[cfg(test)]
static_assertions::assert_impl_all!(Function: Send, Sync);

impl Function {
    /// Create an anonymous function
    pub fn new<F>(body: F) -> Self
    where
        F: 'static + Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync,
    {
        Self::from_body(None, Arc::new(body))
    }

    /// Create a named function. The name is only used for display.
    pub fn named<F>(name: impl Into<PetitString>, body: F) -> Self
    where
        F: 'static + Fn(&Value, &[Value]) -> Result<Value, Error> + Send + Sync,
    {
        Self::from_body(Some(name.into()), Arc::new(body))
    }

    fn from_body(name: Option<PetitString>, body: Arc<Body>) -> Self {
        Self(Arc::new(FunctionInner {
            name,
            body,
            properties: Properties::new(),
            prototype: None,
        }))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Call this function with a receiver and arguments. Any error raised by
    /// the body is returned as-is.
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, Error> {
        (self.0.body)(this, args)
    }

    /// Call this function with an undefined receiver
    pub fn invoke(&self, args: &[Value]) -> Result<Value, Error> {
        self.call(&Value::Undefined, args)
    }

    /// Get a property by key, falling back to the prototype chain
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        let key = key.into();
        match (self.0.properties.get(&key), &self.0.prototype) {
            (Some(value), _) => value.clone(),
            (None, Some(prototype)) => prototype.lookup(&key),
            (None, None) => Value::Undefined,
        }
    }

    /// Get a property defined directly on this function
    pub fn get_own(&self, key: impl Into<PropertyKey>) -> Option<&Value> {
        self.0.properties.get(&key.into())
    }

    /// Attach a property to this function
    pub fn insert(
        self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Self {
        self.with_inner(|inner| {
            inner.properties.insert(key.into(), value.into());
        })
    }

    /// Set the prototype that missing property lookups are delegated to
    pub fn with_prototype(self, prototype: Object) -> Self {
        self.with_inner(|inner| inner.prototype = Some(prototype))
    }

    /// Do these two handles point to the same allocation?
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Do these two functions run the same body? This is true for a function
    /// and its [copy](crate::copy), even though they're separate allocations.
    pub fn shares_body(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0.body, &other.0.body)
    }

    /// Allocate a new function with the same body, name and prototype, and a
    /// fresh copy of the own properties
    pub(crate) fn detach(&self) -> Self {
        Self(Arc::new(self.0.deref().clone()))
    }

    fn with_inner(mut self, f: impl FnOnce(&mut FunctionInner)) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.0) {
            f(inner);
            self
        } else {
            let mut inner = self.0.deref().clone();
            f(&mut inner);
            Self(inner.into())
        }
    }
}

impl OwnProperties for Function {
    fn own_properties(&self) -> &Properties {
        &self.0.properties
    }

    fn prototype(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }
}

impl PartialEq for Function {
    /// Functions are compared by identity
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name().unwrap_or("(anonymous)"))
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name())
            .field("properties", &self.0.properties)
            .field("prototype", &self.0.prototype)
            .finish_non_exhaustive()
    }
}
