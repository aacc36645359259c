//! A quad is a triple asserted in a given context (named graph).
//!
//! Quads are represented as a pair of a [`Triple`] and a [`Context`].
use crate::term::{Context, Term};
use crate::triple::Triple;

/// A quad: `([subject, predicate, object], context)`.
pub type Quad = (Triple, Context);

/// Build a quad from anything convertible to terms.
pub fn quad<S, P, O, G>(s: S, p: P, o: O, g: G) -> Quad
where
    S: Into<Term>,
    P: Into<Term>,
    O: Into<Term>,
    G: Into<Term>,
{
    ([s.into(), p.into(), o.into()], g.into())
}

/// Check that a quad is acceptable in a store:
/// its predicate must be an IRI,
/// and its context must not be a literal.
///
/// Returns a human-readable reason otherwise.
pub fn check_quad(q: &Quad) -> Result<(), String> {
    let ([_, p, _], g) = q;
    if !p.is_iri() {
        return Err(format!("predicate {p} is not an IRI"));
    }
    if g.is_literal() {
        return Err(format!("context {g} is a literal"));
    }
    Ok(())
}
