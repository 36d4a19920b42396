use std::{
    borrow::{Borrow, Cow},
    fmt::{self, Display},
    ops::{Add, Deref},
    sync::Arc,
};

/// A reference-counted immutable string. Used for both string values and
/// string property keys, so cloning a key out of an object never copies the
/// underlying text.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PetitString(Arc<str>);

impl PetitString {
    /// Extract a string slice containing the entire string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for PetitString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for PetitString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PetitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for PetitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq<str> for PetitString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for PetitString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl From<char> for PetitString {
    fn from(value: char) -> Self {
        Self(value.to_string().into())
    }
}

impl From<&str> for PetitString {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<Cow<'_, str>> for PetitString {
    fn from(value: Cow<'_, str>) -> Self {
        Self(value.into())
    }
}

impl From<String> for PetitString {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<PetitString> for String {
    fn from(string: PetitString) -> Self {
        // str is unsized so the Arc can't be unwrapped into an owned String;
        // always copy
        string.as_str().to_owned()
    }
}

impl Add<PetitString> for PetitString {
    type Output = Self;

    /// Perform string concatenation
    fn add(self, rhs: PetitString) -> Self::Output {
        (String::from(&*self.0) + &rhs).into()
    }
}
