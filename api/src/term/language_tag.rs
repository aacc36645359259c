//! I define the [`LanguageTag`] type,
//! which guarantees that the underlying `str`
//! is a well-formed [BCP47](https://tools.ietf.org/search/bcp47) language tag.

use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use thiserror::Error;

lazy_static! {
    /// The `LANGTAG` production of Turtle (without the leading `@`).
    ///
    /// NB: it is more permissive than BCP47,
    /// as it does not check that subtags are registered codes.
    static ref LANG_TAG: Regex = Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap();
}

/// A language tag.
///
/// Language tags are case-insensitive:
/// equality, ordering and hashing all ignore ASCII case,
/// while the original spelling is preserved.
#[derive(Clone, Debug)]
pub struct LanguageTag(Box<str>);

impl LanguageTag {
    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it is not a well-formed language tag.
    pub fn new<T: Into<Box<str>>>(tag: T) -> Result<Self, InvalidLanguageTag> {
        let tag = tag.into();
        if LANG_TAG.is_match(&tag) {
            Ok(LanguageTag(tag))
        } else {
            Err(InvalidLanguageTag(tag.into_string()))
        }
    }

    /// Gets a reference to the underlying `str`, as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().map(|c| c.to_ascii_lowercase())
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &LanguageTag) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Eq for LanguageTag {}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &LanguageTag) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl Hash for LanguageTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().for_each(|c| c.hash(state));
    }
}

/// This error is raised when trying to parse an invalid language tag.
#[derive(Debug, Error)]
#[error("The given language tag '{0}' does not comply with BCP47")]
pub struct InvalidLanguageTag(pub String);
