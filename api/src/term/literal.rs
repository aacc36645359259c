//! I define the [`Literal`] type.
//!
//! A literal is a lexical value with an optional language tag or an optional datatype,
//! but never both.
use super::iri::Iri;
use super::language_tag::{InvalidLanguageTag, LanguageTag};
use thiserror::Error;

/// An RDF literal.
///
/// Two literals are equal iff their lexical values, language tags and datatypes are all equal,
/// language tags being compared case-insensitively.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    lexical: Box<str>,
    language: Option<LanguageTag>,
    datatype: Option<Iri>,
}

impl Literal {
    /// Build a literal from its three components.
    ///
    /// Fails if both `language` and `datatype` are provided,
    /// or if `language` is not a well-formed language tag.
    pub fn new<T: Into<Box<str>>>(
        lexical: T,
        language: Option<&str>,
        datatype: Option<Iri>,
    ) -> Result<Self, InvalidLiteral> {
        if language.is_some() && datatype.is_some() {
            return Err(InvalidLiteral::LanguageAndDatatype);
        }
        let language = language.map(LanguageTag::new).transpose()?;
        Ok(Literal {
            lexical: lexical.into(),
            language,
            datatype,
        })
    }

    /// Build a literal with neither language tag nor datatype.
    pub fn simple<T: Into<Box<str>>>(lexical: T) -> Self {
        Literal {
            lexical: lexical.into(),
            language: None,
            datatype: None,
        }
    }

    /// Build a language-tagged literal.
    pub fn lang<T: Into<Box<str>>>(lexical: T, tag: &str) -> Result<Self, InvalidLiteral> {
        Ok(Literal::simple(lexical).with_language(LanguageTag::new(tag)?))
    }

    /// Build a datatyped literal.
    pub fn typed<T: Into<Box<str>>>(lexical: T, datatype: Iri) -> Self {
        Literal::simple(lexical).with_datatype(datatype)
    }

    /// Return this literal with the given language tag. Any datatype is cleared.
    pub fn with_language(self, tag: LanguageTag) -> Self {
        Literal {
            lexical: self.lexical,
            language: Some(tag),
            datatype: None,
        }
    }

    /// Return this literal with the given datatype. Any language tag is cleared.
    pub fn with_datatype(self, datatype: Iri) -> Self {
        Literal {
            lexical: self.lexical,
            language: None,
            datatype: Some(datatype),
        }
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }
}

/// This error is raised when the construction of a [`Literal`] fails.
#[derive(Debug, Error)]
pub enum InvalidLiteral {
    /// A literal can not have both a language tag and a datatype.
    #[error("A literal can not have both a language tag and a datatype")]
    LanguageAndDatatype,
    /// The language tag is not well-formed.
    #[error(transparent)]
    InvalidLanguageTag(#[from] InvalidLanguageTag),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::xsd;

    #[test]
    fn language_and_datatype_are_exclusive() {
        let res = Literal::new("chat", Some("fr"), Some(xsd::string()));
        assert!(matches!(res, Err(InvalidLiteral::LanguageAndDatatype)));
    }

    #[test]
    fn invalid_language() {
        let res = Literal::new("chat", Some("not a tag"), None);
        assert!(matches!(res, Err(InvalidLiteral::InvalidLanguageTag(_))));
    }

    #[test]
    fn builders_clear_the_other_field() -> Result<(), InvalidLiteral> {
        let lit = Literal::lang("42", "en")?.with_datatype(xsd::integer());
        assert_eq!(lit.language(), None);
        assert_eq!(lit.datatype(), Some(&xsd::integer()));

        let lit = lit.with_language(LanguageTag::new("de")?);
        assert_eq!(lit.datatype(), None);
        assert_eq!(lit.language().map(LanguageTag::as_str), Some("de"));
        Ok(())
    }

    #[test]
    fn equality() -> Result<(), InvalidLiteral> {
        assert_eq!(Literal::lang("hello", "en")?, Literal::lang("hello", "EN")?);
        assert_ne!(Literal::lang("hello", "en")?, Literal::lang("hello", "fr")?);
        assert_ne!(Literal::lang("hello", "en")?, Literal::simple("hello"));
        assert_ne!(
            Literal::simple("1"),
            Literal::typed("1", xsd::integer())
        );
        assert_eq!(
            Literal::new("1", None, Some(xsd::integer()))?,
            Literal::typed("1", xsd::integer())
        );
        Ok(())
    }
}
