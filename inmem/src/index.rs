//! Indexes used by the in-memory store.
//!
//! A [`TermIndex`] is a bidirectional association of [terms](Term) with short numeric [indices](Index).
//! A [`QuadIndex`] stores quads as arrays of indices,
//! sorted in six different orders so that any pattern can be answered by range scans.
use rdfstore_api::quad::Quad;
use rdfstore_api::store::{StoreError, StoreResult};
use rdfstore_api::term::pattern::{TermPattern, TriplePattern};
use rdfstore_api::term::{Context, Term};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

/// The short numeric index representing a term in a [`TermIndex`].
pub type Index = u32;

/// A bidirectional association of [terms](Term) with [indices](Index).
///
/// Terms are never removed: an index, once allocated, stays valid
/// for the lifetime of the term-index.
/// Consequently, the memory used by a term-index only grows,
/// even when the quads using its terms are removed;
/// copying the owning [`QuadIndex`] into a new one with [`QuadIndex::compact`] reclaims it.
#[derive(Clone, Debug, Default)]
pub struct TermIndex {
    t2i: HashMap<Term, Index>,
    i2t: Vec<Term>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    pub fn get_index(&self, t: &Term) -> Option<Index> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    ///
    /// Fails with [`StoreError::Capacity`] if all indices are already allocated.
    pub fn ensure_index(&mut self, t: &Term) -> StoreResult<Index> {
        if let Some(i) = self.t2i.get(t) {
            return Ok(*i);
        }
        let i = Index::try_from(self.i2t.len())
            .ok()
            .filter(|i| *i < Index::MAX)
            .ok_or(StoreError::Capacity(Index::MAX as usize))?;
        match self.t2i.entry(t.clone()) {
            Entry::Vacant(e) => {
                self.i2t.push(t.clone());
                e.insert(i);
                Ok(i)
            }
            Entry::Occupied(e) => Ok(*e.get()),
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](TermIndex::get_index)
    /// or [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method may panic.
    pub fn get_term(&self, i: Index) -> &Term {
        &self.i2t[i as usize]
    }
}

// Positions of the components in a quad of indices.
const S: usize = 0;
const P: usize = 1;
const O: usize = 2;
const G: usize = 3;

/// The orders in which quads are sorted.
/// In each order, `key[k] = quad[order[k]]`.
const ORDERS: [[usize; 4]; 6] = [
    [S, P, O, G],
    [P, O, S, G],
    [O, S, P, G],
    [G, S, P, O],
    [G, P, O, S],
    [G, O, S, P],
];
const ORDER_NAMES: [&str; 6] = ["SPOG", "POSG", "OSPG", "GSPO", "GPOS", "GOSP"];

/// The constraint on one position of a quad, once the terms of a pattern are resolved to indices.
#[derive(Clone, Debug)]
enum Resolved {
    Any,
    /// Sorted, without duplicates; empty means that nothing can match.
    Among(Vec<Index>),
}

impl Resolved {
    fn accepts(&self, i: Index) -> bool {
        match self {
            Resolved::Any => true,
            Resolved::Among(v) => v.binary_search(&i).is_ok(),
        }
    }
}

/// A set of quads, indexed in every order.
#[derive(Clone, Debug, Default)]
pub struct QuadIndex {
    terms: TermIndex,
    sorted: [BTreeSet<[Index; 4]>; 6],
}

impl QuadIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of quads in this index.
    pub fn len(&self) -> usize {
        self.sorted[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn terms(&self) -> &TermIndex {
        &self.terms
    }

    /// A copy of this index, without the terms no quad uses anymore.
    pub fn compact(&self) -> StoreResult<QuadIndex> {
        let mut ret = QuadIndex::new();
        for q in self.quads(&TriplePattern::any(), None) {
            ret.insert(&q)?;
        }
        Ok(ret)
    }

    /// Insert a quad; return `false` if it was already present.
    pub fn insert(&mut self, quad: &Quad) -> StoreResult<bool> {
        let ([s, p, o], g) = quad;
        let ids = [
            self.terms.ensure_index(s)?,
            self.terms.ensure_index(p)?,
            self.terms.ensure_index(o)?,
            self.terms.ensure_index(g)?,
        ];
        if !self.sorted[0].insert(ids) {
            return Ok(false);
        }
        for (order, set) in ORDERS.iter().zip(self.sorted.iter_mut()).skip(1) {
            let inserted = set.insert(to_key(ids, order));
            debug_assert!(inserted);
        }
        Ok(true)
    }

    /// Remove a quad; return `false` if it was not present.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        match self.quad_ids(quad) {
            Some(ids) => self.remove_ids(ids),
            None => false,
        }
    }

    /// Remove all quads matching `pattern` in `context` (in all contexts if `None`),
    /// and return them.
    pub fn remove_matching(&mut self, pattern: &TriplePattern, context: Option<&Context>) -> Vec<Quad> {
        let matching = self.matching(pattern, context);
        let removed = matching.iter().map(|ids| self.to_quad(*ids)).collect();
        for ids in matching {
            self.remove_ids(ids);
        }
        removed
    }

    pub fn contains(&self, quad: &Quad) -> bool {
        self.quad_ids(quad)
            .map(|ids| self.sorted[0].contains(&ids))
            .unwrap_or(false)
    }

    /// The quads matching `pattern` in `context` (in all contexts if `None`).
    pub fn quads(&self, pattern: &TriplePattern, context: Option<&Context>) -> Vec<Quad> {
        self.matching(pattern, context)
            .into_iter()
            .map(|ids| self.to_quad(ids))
            .collect()
    }

    /// The distinct contexts of the quads in this index.
    pub fn contexts(&self) -> Vec<Context> {
        let gspo = &self.sorted[3];
        let mut ret: Vec<Context> = vec![];
        let mut last = None;
        for key in gspo {
            if last != Some(key[0]) {
                last = Some(key[0]);
                ret.push(self.terms.get_term(key[0]).clone());
            }
        }
        ret
    }

    /// The number of quads in `context`.
    pub fn context_len(&self, context: &Context) -> usize {
        match self.terms.get_index(context) {
            Some(gi) => self.sorted[3]
                .range([gi, 0, 0, 0]..=[gi, Index::MAX, Index::MAX, Index::MAX])
                .count(),
            None => 0,
        }
    }

    fn quad_ids(&self, quad: &Quad) -> Option<[Index; 4]> {
        let ([s, p, o], g) = quad;
        Some([
            self.terms.get_index(s)?,
            self.terms.get_index(p)?,
            self.terms.get_index(o)?,
            self.terms.get_index(g)?,
        ])
    }

    fn remove_ids(&mut self, ids: [Index; 4]) -> bool {
        if !self.sorted[0].remove(&ids) {
            return false;
        }
        for (order, set) in ORDERS.iter().zip(self.sorted.iter_mut()).skip(1) {
            let removed = set.remove(&to_key(ids, order));
            debug_assert!(removed);
        }
        true
    }

    fn to_quad(&self, ids: [Index; 4]) -> Quad {
        let [s, p, o, g] = ids.map(|i| self.terms.get_term(i).clone());
        ([s, p, o], g)
    }

    fn resolve(&self, tp: &TermPattern) -> Resolved {
        match tp.candidates() {
            None => Resolved::Any,
            Some(candidates) => {
                let mut ids: Vec<Index> = candidates
                    .iter()
                    .filter_map(|t| self.terms.get_index(t))
                    .collect();
                ids.sort_unstable();
                ids.dedup();
                Resolved::Among(ids)
            }
        }
    }

    /// Evaluate a pattern, returning quads of indices in `[s, p, o, g]` order.
    ///
    /// The index whose leading positions are all constrained is scanned,
    /// with one range per combination of candidates for those positions;
    /// the remaining positions are filtered.
    fn matching(&self, pattern: &TriplePattern, context: Option<&Context>) -> Vec<[Index; 4]> {
        let [sp, pp, op] = pattern.positions();
        let constraints = [
            self.resolve(sp),
            self.resolve(pp),
            self.resolve(op),
            match context {
                Some(g) => Resolved::Among(self.terms.get_index(g).into_iter().collect()),
                None => Resolved::Any,
            },
        ];
        if constraints
            .iter()
            .any(|c| matches!(c, Resolved::Among(v) if v.is_empty()))
        {
            return vec![];
        }

        let (k, bound) = ORDERS
            .iter()
            .map(|order| {
                order
                    .iter()
                    .take_while(|pos| !matches!(constraints[**pos], Resolved::Any))
                    .count()
            })
            .enumerate()
            .fold((0, 0), |best, (k, n)| if n > best.1 { (k, n) } else { best });
        log::trace!("scanning {} index with {} bound position(s)", ORDER_NAMES[k], bound);
        let order = &ORDERS[k];

        let mut prefixes: Vec<Vec<Index>> = vec![vec![]];
        for pos in &order[..bound] {
            if let Resolved::Among(candidates) = &constraints[*pos] {
                prefixes = prefixes
                    .iter()
                    .flat_map(|prefix| {
                        candidates.iter().map(move |c| {
                            let mut prefix = prefix.clone();
                            prefix.push(*c);
                            prefix
                        })
                    })
                    .collect();
            }
        }

        let mut ret = vec![];
        for prefix in prefixes {
            let mut lo = [0; 4];
            let mut hi = [Index::MAX; 4];
            lo[..bound].copy_from_slice(&prefix);
            hi[..bound].copy_from_slice(&prefix);
            for key in self.sorted[k].range(lo..=hi) {
                let ids = from_key(*key, order);
                if order[bound..].iter().all(|pos| constraints[*pos].accepts(ids[*pos])) {
                    ret.push(ids);
                }
            }
        }
        ret
    }
}

fn to_key(ids: [Index; 4], order: &[usize; 4]) -> [Index; 4] {
    order.map(|pos| ids[pos])
}

fn from_key(key: [Index; 4], order: &[usize; 4]) -> [Index; 4] {
    let mut ids = [0; 4];
    for (k, pos) in order.iter().enumerate() {
        ids[*pos] = key[k];
    }
    ids
}
