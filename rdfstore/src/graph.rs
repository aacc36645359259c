//! A graph is a view over the quads of one context of a [`Store`].
//!
//! Several graphs (and [datasets](crate::Dataset)) may share one store,
//! each of them seeing only the quads of its own context.
//!
//! Graphs also support set algebra ([`union`](Graph::union), [`difference`](Graph::difference),
//! [`intersect`](Graph::intersect)), where triples are compared regardless of their context.
use rdfstore_api::prefix::{InvalidPrefix, NamespaceManager};
use rdfstore_api::quad::Quad;
use rdfstore_api::store::{QuadSource, Store, StoreResult, TripleSource};
use rdfstore_api::term::pattern::{Any, TermPattern, TriplePattern};
use rdfstore_api::term::{Context, Iri, Term};
use rdfstore_api::triple::{in_context, Triple};
use rdfstore_inmem::MemoryStore;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Type alias for the iterators of terms returned by [`Graph::subjects`] and its siblings.
pub type TermSource<'a> = Box<dyn Iterator<Item = Term> + 'a>;

/// A view over the quads of one context of a store.
#[derive(Debug)]
pub struct Graph<S: Store = MemoryStore> {
    store: Arc<S>,
    identifier: Context,
    namespace_manager: NamespaceManager,
}

impl Graph<MemoryStore> {
    /// A graph over a fresh [`MemoryStore`], using the store's identifier as its context.
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let identifier = store.identifier().clone();
        Self::with_store(Arc::new(store), identifier)
    }
}

impl Default for Graph<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Store> Graph<S> {
    /// A graph over the quads of `store` in context `identifier`.
    pub fn with_store<C: Into<Context>>(store: Arc<S>, identifier: C) -> Self {
        Graph {
            store,
            identifier: identifier.into(),
            namespace_manager: NamespaceManager::with_defaults(),
        }
    }

    /// The context of this graph.
    pub fn identifier(&self) -> &Context {
        &self.identifier
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn open(&self, locator: &str, create: bool) -> StoreResult<()> {
        self.store.open(locator, create)
    }

    pub fn close(&self) -> StoreResult<()> {
        self.store.close()
    }

    pub fn destroy(&self, locator: &str) -> StoreResult<()> {
        self.store.destroy(locator)
    }

    pub fn commit(&self) -> StoreResult<()> {
        self.store.commit()
    }

    pub fn rollback(&self) -> StoreResult<()> {
        self.store.rollback()
    }

    /// Insert a triple in this graph; return `true` iff it was not already there.
    pub fn add(&self, triple: Triple) -> StoreResult<bool> {
        self.store.add(in_context(triple, self.identifier.clone()))
    }

    /// Insert the given quads, skipping those whose context is not this graph's.
    ///
    /// Return the number of triples actually inserted.
    pub fn add_n<I>(&self, quads: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = Quad>,
    {
        let (mine, others): (Vec<Quad>, Vec<Quad>) = quads
            .into_iter()
            .partition(|(_, g)| g == &self.identifier);
        if !others.is_empty() {
            log::debug!(
                "{}: ignoring {} quad(s) from other contexts",
                self.identifier,
                others.len()
            );
        }
        self.store.add_n(mine)
    }

    /// Insert all the given triples; return the number of triples actually inserted.
    pub fn extend<I>(&self, triples: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = Triple>,
    {
        let g = &self.identifier;
        self.store
            .add_n(triples.into_iter().map(|t| in_context(t, g.clone())))
    }

    /// Remove all triples matching `pattern`; return the number of triples removed.
    pub fn remove(&self, pattern: &TriplePattern) -> StoreResult<usize> {
        self.store.remove(pattern, Some(&self.identifier))
    }

    /// Iterate over the triples of this graph matching `pattern`.
    pub fn triples(&self, pattern: &TriplePattern) -> StoreResult<TripleSource<'_>> {
        self.store.triples(pattern, Some(&self.identifier))
    }

    /// Iterate over the triples of this graph matching `pattern`,
    /// where any position may hold a list of candidate terms.
    pub fn triples_choices(&self, pattern: &TriplePattern) -> StoreResult<TripleSource<'_>> {
        self.store.triples_choices(pattern, Some(&self.identifier))
    }

    /// Iterate over the triples of this graph matching `pattern`, with their context.
    pub fn quads(&self, pattern: &TriplePattern) -> StoreResult<QuadSource<'_>> {
        self.store.quads(pattern, Some(&self.identifier))
    }

    /// Iterate over all the triples of this graph.
    pub fn iter(&self) -> StoreResult<TripleSource<'_>> {
        self.triples(&TriplePattern::any())
    }

    pub fn contains(&self, triple: &Triple) -> StoreResult<bool> {
        self.store
            .contains(&(triple.clone(), self.identifier.clone()))
    }

    /// The number of distinct triples in this graph.
    pub fn len(&self) -> StoreResult<usize> {
        self.store.len(Some(&self.identifier))
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// The subjects of the triples with the given predicate and object.
    ///
    /// A subject is yielded once per matching triple.
    pub fn subjects<P, O>(&self, predicate: P, object: O) -> StoreResult<TermSource<'_>>
    where
        P: Into<TermPattern>,
        O: Into<TermPattern>,
    {
        let pattern = TriplePattern::new(Any, predicate, object);
        Ok(Box::new(self.triples(&pattern)?.map(|[s, _, _]| s)))
    }

    /// The predicates of the triples with the given subject and object.
    pub fn predicates<S2, O>(&self, subject: S2, object: O) -> StoreResult<TermSource<'_>>
    where
        S2: Into<TermPattern>,
        O: Into<TermPattern>,
    {
        let pattern = TriplePattern::new(subject, Any, object);
        Ok(Box::new(self.triples(&pattern)?.map(|[_, p, _]| p)))
    }

    /// The objects of the triples with the given subject and predicate.
    pub fn objects<S2, P>(&self, subject: S2, predicate: P) -> StoreResult<TermSource<'_>>
    where
        S2: Into<TermPattern>,
        P: Into<TermPattern>,
    {
        let pattern = TriplePattern::new(subject, predicate, Any);
        Ok(Box::new(self.triples(&pattern)?.map(|[_, _, o]| o)))
    }

    /// Check whether every subject and object of this graph
    /// is reachable from every other one, ignoring the direction of triples.
    ///
    /// Predicates are not nodes. An empty graph is connected.
    pub fn connected(&self) -> StoreResult<bool> {
        let mut nodes = UnionFind::default();
        for [s, _, o] in self.iter()? {
            nodes.union(s, o);
        }
        Ok(nodes.components() <= 1)
    }

    /// A new graph containing the triples of either `self` or `other`.
    pub fn union<S2: Store>(&self, other: &Graph<S2>) -> StoreResult<Graph> {
        let ret = Graph::new();
        ret.extend(self.iter()?)?;
        ret.extend(other.iter()?)?;
        ret.commit()?;
        Ok(ret)
    }

    /// A new graph containing the triples of `self` absent from `other`.
    pub fn difference<S2: Store>(&self, other: &Graph<S2>) -> StoreResult<Graph> {
        let excluded: HashSet<Triple> = other.iter()?.collect();
        let ret = Graph::new();
        ret.extend(self.iter()?.filter(|t| !excluded.contains(t)))?;
        ret.commit()?;
        Ok(ret)
    }

    /// A new graph containing the triples present in both `self` and `other`.
    pub fn intersect<S2: Store>(&self, other: &Graph<S2>) -> StoreResult<Graph> {
        let kept: HashSet<Triple> = other.iter()?.collect();
        let ret = Graph::new();
        ret.extend(self.iter()?.filter(|t| kept.contains(t)))?;
        ret.commit()?;
        Ok(ret)
    }

    /// Add every triple of `other` to this graph.
    pub fn union_in_place<S2: Store>(&self, other: &Graph<S2>) -> StoreResult<usize> {
        let added: Vec<Triple> = other.iter()?.collect();
        self.extend(added)
    }

    /// Remove from this graph every triple present in `other`.
    pub fn difference_in_place<S2: Store>(&self, other: &Graph<S2>) -> StoreResult<usize> {
        let excluded: HashSet<Triple> = other.iter()?.collect();
        let removed: Vec<Triple> = self.iter()?.filter(|t| excluded.contains(t)).collect();
        self.remove_all(removed)
    }

    /// Remove from this graph every triple absent from `other`.
    pub fn intersect_in_place<S2: Store>(&self, other: &Graph<S2>) -> StoreResult<usize> {
        let kept: HashSet<Triple> = other.iter()?.collect();
        let removed: Vec<Triple> = self.iter()?.filter(|t| !kept.contains(t)).collect();
        self.remove_all(removed)
    }

    fn remove_all(&self, triples: Vec<Triple>) -> StoreResult<usize> {
        let mut n = 0;
        for t in &triples {
            n += self.remove(&TriplePattern::from(t))?;
        }
        Ok(n)
    }

    /// Bind `prefix` to `namespace` in the namespace manager of this graph.
    ///
    /// See [`NamespaceManager::bind`].
    pub fn bind(&mut self, prefix: &str, namespace: Iri, replace: bool) -> Result<(), InvalidPrefix> {
        self.namespace_manager.bind(prefix, namespace, replace)
    }

    /// Abbreviate `iri` using the namespace manager of this graph.
    ///
    /// See [`NamespaceManager::qname`].
    pub fn qname(&mut self, iri: &str) -> String {
        self.namespace_manager.qname(iri)
    }

    /// Iterate over the `(prefix, namespace)` bindings of this graph.
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &Iri)> + Clone + '_ {
        self.namespace_manager.namespaces()
    }

    pub fn namespace_manager(&self) -> &NamespaceManager {
        &self.namespace_manager
    }

    pub fn namespace_manager_mut(&mut self) -> &mut NamespaceManager {
        &mut self.namespace_manager
    }
}

/// A disjoint-set forest over terms, with path halving and union by size.
#[derive(Default)]
struct UnionFind {
    ids: HashMap<Term, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    fn node(&mut self, t: Term) -> usize {
        let next = self.parent.len();
        let i = *self.ids.entry(t).or_insert(next);
        if i == next {
            self.parent.push(i);
            self.size.push(1);
            self.components += 1;
        }
        i
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: Term, b: Term) {
        let a = self.node(a);
        let b = self.node(b);
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.components -= 1;
    }

    fn components(&self) -> usize {
        self.components
    }
}
