//! A dataset is a view over all the contexts of a [`Store`].
//!
//! Contexts are not stored on their own:
//! they appear with their first quad and vanish with their last one.
use crate::graph::Graph;
use rdfstore_api::quad::Quad;
use rdfstore_api::store::{QuadSource, Store, StoreResult, TripleSource};
use rdfstore_api::term::pattern::TriplePattern;
use rdfstore_api::term::Context;
use rdfstore_inmem::MemoryStore;
use std::sync::Arc;

/// A conjunctive view over every context of a store.
#[derive(Debug)]
pub struct Dataset<S: Store = MemoryStore> {
    store: Arc<S>,
}

impl Dataset<MemoryStore> {
    /// A dataset over a fresh [`MemoryStore`].
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }
}

impl Default for Dataset<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Store> Dataset<S> {
    pub fn with_store(store: Arc<S>) -> Self {
        Dataset { store }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// A view over the context `identifier` of this dataset.
    pub fn graph<C: Into<Context>>(&self, identifier: C) -> Graph<S> {
        Graph::with_store(self.store.clone(), identifier)
    }

    /// A view over the context named by the identifier of the store.
    pub fn default_graph(&self) -> Graph<S> {
        self.graph(self.store.identifier().clone())
    }

    /// The contexts holding at least one quad.
    pub fn contexts(&self) -> StoreResult<Vec<Context>> {
        self.store.contexts(None)
    }

    /// Iterate over the quads matching `pattern` in `context` (in all contexts if `None`).
    pub fn quads(
        &self,
        pattern: &TriplePattern,
        context: Option<&Context>,
    ) -> StoreResult<QuadSource<'_>> {
        self.store.quads(pattern, context)
    }

    /// Iterate over the triples matching `pattern` in all contexts.
    ///
    /// A triple asserted in several contexts is yielded once per context.
    pub fn triples(&self, pattern: &TriplePattern) -> StoreResult<TripleSource<'_>> {
        self.store.triples(pattern, None)
    }

    pub fn add_quad(&self, quad: Quad) -> StoreResult<bool> {
        self.store.add(quad)
    }

    pub fn add_n<I>(&self, quads: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = Quad>,
    {
        self.store.add_n(quads)
    }

    /// Remove the quads matching `pattern` in `context` (in all contexts if `None`).
    pub fn remove(&self, pattern: &TriplePattern, context: Option<&Context>) -> StoreResult<usize> {
        self.store.remove(pattern, context)
    }

    pub fn contains(&self, quad: &Quad) -> StoreResult<bool> {
        self.store.contains(quad)
    }

    /// The number of quads in all contexts.
    pub fn len(&self) -> StoreResult<usize> {
        self.store.len(None)
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn commit(&self) -> StoreResult<()> {
        self.store.commit()
    }

    pub fn rollback(&self) -> StoreResult<()> {
        self.store.rollback()
    }
}
