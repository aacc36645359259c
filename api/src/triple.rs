//! A triple is the building block of an RDF graph:
//! a subject, a predicate and an object.
//!
//! Triples are represented as arrays of three [`Term`]s,
//! in subject-predicate-object order.
//! Destructuring (`let [s, p, o] = triple;`) is the idiomatic way to access their components.
use crate::term::{Context, Term};

/// A triple: `[subject, predicate, object]`.
pub type Triple = [Term; 3];

/// Build a triple from anything convertible to terms.
pub fn triple<S, P, O>(s: S, p: P, o: O) -> Triple
where
    S: Into<Term>,
    P: Into<Term>,
    O: Into<Term>,
{
    [s.into(), p.into(), o.into()]
}

/// Attach a context to a triple, producing a [`Quad`](crate::quad::Quad).
pub fn in_context(t: Triple, context: Context) -> crate::quad::Quad {
    (t, context)
}
