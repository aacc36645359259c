//! I define the [`Iri`] type,
//! an opaque IRI reference.
//!
//! IRIs are not resolved nor normalized:
//! two [`Iri`]s are equal iff their text is identical.
//! Relative references (such as `likes`) are accepted.
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::ops::Deref;
use thiserror::Error;

lazy_static! {
    /// Characters that are forbidden anywhere in an `IRIREF`
    /// according to the [Turtle grammar](https://www.w3.org/TR/turtle/#grammar-production-IRIREF).
    static ref FORBIDDEN: Regex = Regex::new(r#"[\x00-\x20<>"{}|^`\\]"#).unwrap();
}

/// An IRI reference, treated as an opaque identifier.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Iri(Box<str>);

impl Iri {
    /// Build a new [`Iri`],
    /// checking that it contains no character forbidden in IRI references.
    pub fn new<T: Into<Box<str>>>(iri: T) -> Result<Self, InvalidIri> {
        let iri = iri.into();
        if FORBIDDEN.is_match(&iri) {
            Err(InvalidIri(iri.into_string()))
        } else {
            Ok(Iri(iri))
        }
    }

    /// Build a new [`Iri`] from trusted text.
    ///
    /// It does not check that the value is a valid IRI reference.
    /// If it is not, stores may accept it but serializers may produce invalid output.
    pub fn new_unchecked<T: Into<Box<str>>>(iri: T) -> Self {
        Iri(iri.into())
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Iri {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// This error is raised when trying to build an invalid IRI reference.
#[derive(Debug, Error)]
#[error("The given IRI '{0}' contains characters that are not allowed in an IRI reference")]
pub struct InvalidIri(pub String);
