// this module is transparently re-exported by its parent `store`
use super::{StoreError, StoreResult};
use crate::quad::{check_quad, Quad};
use crate::term::pattern::TriplePattern;
use crate::term::Context;
use crate::triple::Triple;
use std::collections::HashSet;

/// Type alias for the iterators of triples returned by a store.
pub type TripleSource<'a> = Box<dyn Iterator<Item = Triple> + 'a>;
/// Type alias for the iterators of quads returned by a store.
pub type QuadSource<'a> = Box<dyn Iterator<Item = Quad> + 'a>;

/// The contract of a quad store backend.
///
/// All methods take `&self`, so that several views (graphs, datasets)
/// can share one store; implementations serialize access internally.
///
/// # Transactions
///
/// Mutations ([`add`](Store::add), [`add_n`](Store::add_n), [`remove`](Store::remove))
/// are visible to subsequent reads through the same store (read-your-writes),
/// but only become visible to other connections to the same storage after [`commit`](Store::commit).
/// [`rollback`](Store::rollback) undoes every mutation since the last commit.
///
/// # Queries
///
/// The iterators returned by queries reflect a single snapshot of the store:
/// mutating the store while iterating never affects an iterator already returned.
/// Their order is unspecified, but identical for two queries with no mutation in between.
pub trait Store {
    /// The identifier of this store, used as the default context.
    fn identifier(&self) -> &Context;

    /// Connect this store to the storage at `locator`.
    ///
    /// If no storage exists there, it is created if `create` is true,
    /// otherwise [`StoreError::NotFound`] is returned.
    /// Uncommitted changes are discarded;
    /// quads committed before the store was connected anywhere are kept.
    fn open(&self, locator: &str, create: bool) -> StoreResult<()>;

    /// Release the storage this store is connected to, if any.
    /// Uncommitted changes are discarded in either case.
    fn close(&self) -> StoreResult<()>;

    /// Irreversibly erase the storage at `locator`.
    fn destroy(&self, locator: &str) -> StoreResult<()>;

    /// Insert a quad, unless it is already present.
    ///
    /// Return `true` iff the quad was actually inserted.
    fn add(&self, quad: Quad) -> StoreResult<bool>;

    /// Insert several quads, ignoring those already present
    /// (including duplicates within `quads`).
    ///
    /// Either all quads are valid and processed, or none is inserted.
    /// Return the number of quads actually inserted.
    fn add_n<I>(&self, quads: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = Quad>,
        Self: Sized,
    {
        let quads: Vec<Quad> = quads.into_iter().collect();
        for q in &quads {
            check_quad(q).map_err(StoreError::InvalidQuad)?;
        }
        let mut inserted = 0;
        for q in quads {
            if self.add(q)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Remove every quad matching `pattern` in `context` (in all contexts if `None`).
    ///
    /// Removing nothing is not an error.
    /// Return the number of quads removed.
    fn remove(&self, pattern: &TriplePattern, context: Option<&Context>) -> StoreResult<usize>;

    /// Iterate over the quads matching `pattern` in `context` (in all contexts if `None`).
    fn quads(&self, pattern: &TriplePattern, context: Option<&Context>)
        -> StoreResult<QuadSource<'_>>;

    /// Iterate over the triples matching `pattern` in `context`.
    ///
    /// If `context` is `None`, a triple asserted in several contexts is yielded once per context.
    fn triples(
        &self,
        pattern: &TriplePattern,
        context: Option<&Context>,
    ) -> StoreResult<TripleSource<'_>> {
        Ok(Box::new(self.quads(pattern, context)?.map(|(t, _)| t)))
    }

    /// Iterate over the triples matching a pattern where some positions
    /// hold a list of candidate terms.
    ///
    /// The result is the union, over each candidate, of [`triples`](Store::triples)
    /// with that candidate substituted.
    fn triples_choices(
        &self,
        pattern: &TriplePattern,
        context: Option<&Context>,
    ) -> StoreResult<TripleSource<'_>> {
        log::trace!(
            "triples_choices with {} disjunctive position(s)",
            pattern.disjunction_count()
        );
        self.triples(pattern, context)
    }

    /// Return `true` if this store contains the given quad.
    fn contains(&self, quad: &Quad) -> StoreResult<bool> {
        let (t, g) = quad;
        Ok(self.quads(&TriplePattern::from(t), Some(g))?.next().is_some())
    }

    /// The contexts holding at least one quad (holding `triple` if provided),
    /// in the order in which quads are enumerated.
    ///
    /// Contexts are never stored on their own:
    /// a context exists exactly as long as some quad refers to it.
    fn contexts(&self, triple: Option<&Triple>) -> StoreResult<Vec<Context>> {
        let pattern = triple.map(TriplePattern::from).unwrap_or_default();
        let mut seen = HashSet::new();
        Ok(self
            .quads(&pattern, None)?
            .filter_map(|(_, g)| seen.insert(g.clone()).then_some(g))
            .collect())
    }

    /// The number of quads in `context` (in the whole store if `None`).
    fn len(&self, context: Option<&Context>) -> StoreResult<usize> {
        Ok(self.quads(&TriplePattern::any(), context)?.count())
    }

    /// Make all changes since the last commit durable,
    /// and visible to other connections.
    fn commit(&self) -> StoreResult<()>;

    /// Undo all changes since the last commit.
    fn rollback(&self) -> StoreResult<()>;
}
