//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in rdfstore.
//!
//! I provide the main type [`Term`],
//! and the value types it is made of: [`Iri`], [`BnodeId`] and [`Literal`].
//! Terms are immutable once constructed,
//! and compared by structural equality.

mod _display;

pub mod bnode_id;
pub mod iri;
pub mod language_tag;
pub mod literal;
pub mod pattern;

pub use bnode_id::BnodeId;
pub use iri::Iri;
pub use language_tag::LanguageTag;
pub use literal::Literal;

/// The identifier of a named graph (a *context*) within a store.
///
/// Only IRIs and blank nodes are acceptable contexts;
/// stores reject quads whose context is a literal.
pub type Context = Term;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
}

/// An RDF term.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// An IRI reference, treated as an opaque identifier
    Iri(Iri),
    /// A blank node, whose identifier is scoped to a store
    BlankNode(BnodeId),
    /// A literal value
    Literal(Literal),
}

impl Term {
    /// Return the kind of RDF term that this [`Term`] represents.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Return true if this [`Term`] is an IRI.
    #[inline]
    pub fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Return true if this [`Term`] is a blank node.
    #[inline]
    pub fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Return the IRI of this term, if it is one.
    pub fn iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Return the blank node identifier of this term, if it is one.
    pub fn bnode_id(&self) -> Option<&BnodeId> {
        match self {
            Term::BlankNode(id) => Some(id),
            _ => None,
        }
    }

    /// Return the literal value of this term, if it is one.
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The string value of this term:
    /// the IRI, the blank node identifier, or the lexical form of the literal.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri.as_str(),
            Term::BlankNode(id) => id.as_str(),
            Term::Literal(lit) => lit.lexical_form(),
        }
    }
}

impl From<Iri> for Term {
    fn from(other: Iri) -> Self {
        Term::Iri(other)
    }
}

impl From<BnodeId> for Term {
    fn from(other: BnodeId) -> Self {
        Term::BlankNode(other)
    }
}

impl From<Literal> for Term {
    fn from(other: Literal) -> Self {
        Term::Literal(other)
    }
}

/// Plain literals can be built directly from strings.
impl From<&str> for Term {
    fn from(other: &str) -> Self {
        Term::Literal(Literal::simple(other))
    }
}

impl PartialEq<Iri> for Term {
    fn eq(&self, other: &Iri) -> bool {
        self.iri() == Some(other)
    }
}

impl PartialEq<Literal> for Term {
    fn eq(&self, other: &Literal) -> bool {
        self.literal() == Some(other)
    }
}

#[cfg(test)]
mod test;
