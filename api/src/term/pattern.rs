//! I define *patterns*, used to select triples in a store.
//!
//! Each position of a [`TriplePattern`] is a [`TermPattern`], which is either
//! * bound to a single term,
//! * a wildcard, matching any term,
//! * or a disjunction of candidate terms.
//!
//! ```
//! # use rdfstore_api::term::{Iri, Term};
//! # use rdfstore_api::term::pattern::{Any, TriplePattern};
//! let likes = Term::from(Iri::new_unchecked("likes"));
//! let pizza = Term::from(Iri::new_unchecked("pizza"));
//! let cheese = Term::from(Iri::new_unchecked("cheese"));
//!
//! // who likes pizza?
//! let p1 = TriplePattern::new(Any, &likes, &pizza);
//! // who likes pizza or cheese?
//! let p2 = TriplePattern::new(Any, &likes, vec![pizza, cheese]);
//! ```
use super::Term;
use crate::triple::Triple;

/// A universal pattern: it matches any [`Term`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Any;

/// The pattern for one position of a triple.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TermPattern {
    /// Matches exactly this term
    Bound(Term),
    /// Matches any term
    Wildcard,
    /// Matches any of the candidate terms (and nothing if there is none)
    OneOf(Vec<Term>),
}

impl TermPattern {
    /// Check whether this pattern matches `term`.
    pub fn matches(&self, term: &Term) -> bool {
        match self {
            TermPattern::Bound(t) => t == term,
            TermPattern::Wildcard => true,
            TermPattern::OneOf(candidates) => candidates.contains(term),
        }
    }

    /// Return `Some` if this pattern can only match a single term.
    pub fn constant(&self) -> Option<&Term> {
        match self {
            TermPattern::Bound(t) => Some(t),
            TermPattern::OneOf(candidates) if candidates.len() == 1 => Some(&candidates[0]),
            _ => None,
        }
    }

    /// Return the finite set of terms this pattern accepts,
    /// or `None` for a wildcard.
    pub fn candidates(&self) -> Option<&[Term]> {
        match self {
            TermPattern::Bound(t) => Some(std::slice::from_ref(t)),
            TermPattern::Wildcard => None,
            TermPattern::OneOf(candidates) => Some(candidates),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, TermPattern::Wildcard)
    }

    pub fn is_disjunction(&self) -> bool {
        matches!(self, TermPattern::OneOf(_))
    }
}

impl From<Any> for TermPattern {
    fn from(_: Any) -> Self {
        TermPattern::Wildcard
    }
}

impl From<Term> for TermPattern {
    fn from(other: Term) -> Self {
        TermPattern::Bound(other)
    }
}

impl From<&Term> for TermPattern {
    fn from(other: &Term) -> Self {
        TermPattern::Bound(other.clone())
    }
}

/// `None` is a wildcard.
impl<T: Into<TermPattern>> From<Option<T>> for TermPattern {
    fn from(other: Option<T>) -> Self {
        match other {
            Some(t) => t.into(),
            None => TermPattern::Wildcard,
        }
    }
}

impl From<Vec<Term>> for TermPattern {
    fn from(other: Vec<Term>) -> Self {
        TermPattern::OneOf(other)
    }
}

impl<const N: usize> From<[Term; N]> for TermPattern {
    fn from(other: [Term; N]) -> Self {
        TermPattern::OneOf(other.into())
    }
}

impl From<&[Term]> for TermPattern {
    fn from(other: &[Term]) -> Self {
        TermPattern::OneOf(other.to_vec())
    }
}

/// A pattern selecting triples: one [`TermPattern`] per position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriplePattern {
    pub subject: TermPattern,
    pub predicate: TermPattern,
    pub object: TermPattern,
}

impl TriplePattern {
    pub fn new<S, P, O>(s: S, p: P, o: O) -> Self
    where
        S: Into<TermPattern>,
        P: Into<TermPattern>,
        O: Into<TermPattern>,
    {
        TriplePattern {
            subject: s.into(),
            predicate: p.into(),
            object: o.into(),
        }
    }

    /// The pattern matching every triple.
    pub fn any() -> Self {
        Self::new(Any, Any, Any)
    }

    /// Check whether this pattern matches `triple`.
    pub fn matches(&self, triple: &Triple) -> bool {
        let [s, p, o] = triple;
        self.subject.matches(s) && self.predicate.matches(p) && self.object.matches(o)
    }

    /// The three position patterns, in subject-predicate-object order.
    pub fn positions(&self) -> [&TermPattern; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// The number of positions holding a disjunction of candidates.
    pub fn disjunction_count(&self) -> usize {
        self.positions()
            .iter()
            .filter(|tp| tp.is_disjunction())
            .count()
    }
}

impl Default for TriplePattern {
    fn default() -> Self {
        Self::any()
    }
}

impl From<&Triple> for TriplePattern {
    fn from(other: &Triple) -> Self {
        let [s, p, o] = other;
        Self::new(s, p, o)
    }
}

impl From<Triple> for TriplePattern {
    fn from(other: Triple) -> Self {
        let [s, p, o] = other;
        Self::new(s, p, o)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Iri;

    fn iri(txt: &str) -> Term {
        Iri::new_unchecked(txt).into()
    }

    #[test]
    fn term_pattern() {
        let t1 = iri("tag:t1");
        let t2 = iri("tag:t2");
        let t3 = iri("tag:t3");

        let any = TermPattern::from(Any);
        assert!(any.matches(&t1));
        assert_eq!(any.constant(), None);
        assert_eq!(any.candidates(), None);

        let none = TermPattern::from(None::<Term>);
        assert!(none.is_wildcard());

        let bound = TermPattern::from(&t1);
        assert!(bound.matches(&t1));
        assert!(!bound.matches(&t2));
        assert_eq!(bound.constant(), Some(&t1));

        let empty = TermPattern::from(Vec::<Term>::new());
        assert!(!empty.matches(&t1));
        assert_eq!(empty.constant(), None);

        let one_of = TermPattern::from([t1.clone(), t2.clone()]);
        assert!(one_of.matches(&t1));
        assert!(one_of.matches(&t2));
        assert!(!one_of.matches(&t3));
        assert_eq!(one_of.constant(), None);
        assert_eq!(one_of.candidates().map(<[_]>::len), Some(2));

        let singleton = TermPattern::from(vec![t3.clone()]);
        assert_eq!(singleton.constant(), Some(&t3));
    }

    #[test]
    fn triple_pattern() {
        let likes = iri("likes");
        let pizza = iri("pizza");
        let cheese = iri("cheese");
        let tarek = iri("tarek");

        let p = TriplePattern::new(Any, &likes, vec![pizza.clone(), cheese.clone()]);
        assert_eq!(p.disjunction_count(), 1);
        assert!(p.matches(&[tarek.clone(), likes.clone(), pizza.clone()]));
        assert!(p.matches(&[tarek.clone(), likes.clone(), cheese.clone()]));
        assert!(!p.matches(&[tarek.clone(), likes.clone(), tarek.clone()]));

        let exact = TriplePattern::from(&[tarek.clone(), likes.clone(), pizza.clone()]);
        assert!(exact.matches(&[tarek.clone(), likes.clone(), pizza.clone()]));
        assert!(!exact.matches(&[tarek, likes, cheese]));

        assert_eq!(TriplePattern::default(), TriplePattern::any());
    }
}
