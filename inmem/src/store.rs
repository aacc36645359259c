//! An in-memory implementation of [`Store`].
use crate::index::QuadIndex;
use crate::registry::{Registry, SharedData};
use rdfstore_api::quad::{check_quad, Quad};
use rdfstore_api::store::{QuadSource, Store, StoreError, StoreResult};
use rdfstore_api::term::pattern::TriplePattern;
use rdfstore_api::term::{BnodeId, Context};
use rdfstore_api::triple::Triple;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A [`Store`] keeping all its quads in memory.
///
/// A fresh store is usable right away, without calling [`open`](Store::open).
/// The quads it has committed so far are published to the storage it is later opened on.
/// Once opened on a locator, it works on a private copy of the storage,
/// and [`commit`](Store::commit) publishes its changes to the other stores
/// connected to the same locator in the same [`Registry`].
#[derive(Debug)]
pub struct MemoryStore {
    identifier: Context,
    registry: Arc<Registry>,
    conn: RwLock<Connection>,
}

#[derive(Debug, Default)]
struct Connection {
    attached: Option<Attachment>,
    working: QuadIndex,
    journal: Vec<Change>,
}

#[derive(Debug)]
struct Attachment {
    locator: String,
    shared: SharedData,
}

/// A change made to the working copy since the last commit.
#[derive(Clone, Debug)]
enum Change {
    Added(Quad),
    Removed(Quad),
}

impl MemoryStore {
    /// A new store, identified by a fresh blank node, using the [global registry](Registry::global).
    pub fn new() -> Self {
        Self::with_identifier(BnodeId::fresh())
    }

    pub fn with_identifier<C: Into<Context>>(identifier: C) -> Self {
        Self::with_registry(identifier, Registry::global())
    }

    pub fn with_registry<C: Into<Context>>(identifier: C, registry: Arc<Registry>) -> Self {
        MemoryStore {
            identifier: identifier.into(),
            registry,
            conn: RwLock::new(Connection::default()),
        }
    }

    /// The locator this store is connected to, if any.
    pub fn locator(&self) -> StoreResult<Option<String>> {
        Ok(self.read()?.attached.as_ref().map(|a| a.locator.clone()))
    }

    /// The number of changes not committed yet.
    pub fn pending(&self) -> StoreResult<usize> {
        Ok(self.read()?.journal.len())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Connection>> {
        self.conn
            .read()
            .map_err(|_| StoreError::io("memory store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Connection>> {
        self.conn
            .write()
            .map_err(|_| StoreError::io("memory store lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection {
    /// Undo the changes made since the last commit, warning if there are any.
    fn discard_pending(&mut self, what: &str) -> StoreResult<()> {
        if !self.journal.is_empty() {
            log::warn!(
                "{} discards {} uncommitted change(s)",
                what,
                self.journal.len()
            );
        }
        self.undo()
    }

    fn undo(&mut self) -> StoreResult<()> {
        while let Some(change) = self.journal.pop() {
            match change {
                Change::Added(q) => {
                    self.working.remove(&q);
                }
                Change::Removed(q) => {
                    self.working.insert(&q)?;
                }
            }
        }
        Ok(())
    }
}

/// Insert the quads of `local` into `shared`, and return a copy of the result.
fn publish(shared: &SharedData, local: &QuadIndex) -> StoreResult<QuadIndex> {
    let mut data = shared
        .write()
        .map_err(|_| StoreError::io("shared storage lock poisoned"))?;
    for q in local.quads(&TriplePattern::any(), None) {
        data.insert(&q)?;
    }
    Ok(data.clone())
}

impl Store for MemoryStore {
    fn identifier(&self) -> &Context {
        &self.identifier
    }

    fn open(&self, locator: &str, create: bool) -> StoreResult<()> {
        let mut conn = self.write()?;
        if conn.attached.is_some() {
            return Err(StoreError::Busy {
                locator: locator.to_string(),
            });
        }
        let shared = self.registry.attach(locator, create)?;
        let working = match conn
            .discard_pending("open")
            .and_then(|_| publish(&shared, &conn.working))
        {
            Ok(working) => working,
            Err(err) => {
                self.registry.detach(locator)?;
                return Err(err);
            }
        };
        if !conn.working.is_empty() {
            log::debug!(
                "{} publishes {} quad(s) to {}",
                self.identifier,
                conn.working.len(),
                locator
            );
        }
        conn.working = working;
        conn.attached = Some(Attachment {
            locator: locator.to_string(),
            shared,
        });
        log::debug!("{} opened {}", self.identifier, locator);
        Ok(())
    }

    fn close(&self) -> StoreResult<()> {
        let mut conn = self.write()?;
        conn.discard_pending("close")?;
        let Some(attachment) = conn.attached.take() else {
            return Ok(());
        };
        conn.working = QuadIndex::new();
        self.registry.detach(&attachment.locator)?;
        log::debug!("{} closed {}", self.identifier, attachment.locator);
        Ok(())
    }

    fn destroy(&self, locator: &str) -> StoreResult<()> {
        let mut conn = self.write()?;
        let own = conn
            .attached
            .as_ref()
            .map(|a| a.locator == locator)
            .unwrap_or(false);
        self.registry.destroy(locator, own)?;
        if own {
            conn.attached = None;
            conn.journal.clear();
            conn.working = QuadIndex::new();
        }
        log::debug!("{} destroyed {}", self.identifier, locator);
        Ok(())
    }

    fn add(&self, quad: Quad) -> StoreResult<bool> {
        check_quad(&quad).map_err(StoreError::InvalidQuad)?;
        let mut conn = self.write()?;
        let inserted = conn.working.insert(&quad)?;
        if inserted {
            conn.journal.push(Change::Added(quad));
        }
        Ok(inserted)
    }

    fn add_n<I>(&self, quads: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = Quad>,
    {
        let quads: Vec<Quad> = quads.into_iter().collect();
        for q in &quads {
            check_quad(q).map_err(StoreError::InvalidQuad)?;
        }
        let mut conn = self.write()?;
        let mark = conn.journal.len();
        for q in quads {
            match conn.working.insert(&q) {
                Ok(true) => conn.journal.push(Change::Added(q)),
                Ok(false) => {}
                Err(err) => {
                    for change in conn.journal.split_off(mark) {
                        if let Change::Added(q) = change {
                            conn.working.remove(&q);
                        }
                    }
                    return Err(err);
                }
            }
        }
        Ok(conn.journal.len() - mark)
    }

    fn remove(&self, pattern: &TriplePattern, context: Option<&Context>) -> StoreResult<usize> {
        let mut conn = self.write()?;
        let removed = conn.working.remove_matching(pattern, context);
        let n = removed.len();
        conn.journal.extend(removed.into_iter().map(Change::Removed));
        Ok(n)
    }

    fn quads(
        &self,
        pattern: &TriplePattern,
        context: Option<&Context>,
    ) -> StoreResult<QuadSource<'_>> {
        let quads = self.read()?.working.quads(pattern, context);
        Ok(Box::new(quads.into_iter()))
    }

    fn contains(&self, quad: &Quad) -> StoreResult<bool> {
        Ok(self.read()?.working.contains(quad))
    }

    fn contexts(&self, triple: Option<&Triple>) -> StoreResult<Vec<Context>> {
        let conn = self.read()?;
        match triple {
            None => Ok(conn.working.contexts()),
            Some(t) => {
                let mut seen = HashSet::new();
                Ok(conn
                    .working
                    .quads(&TriplePattern::from(t), None)
                    .into_iter()
                    .filter_map(|(_, g)| seen.insert(g.clone()).then_some(g))
                    .collect())
            }
        }
    }

    fn len(&self, context: Option<&Context>) -> StoreResult<usize> {
        let conn = self.read()?;
        Ok(match context {
            None => conn.working.len(),
            Some(g) => conn.working.context_len(g),
        })
    }

    /// Publish the pending changes to the storage, then refresh the working copy from it.
    ///
    /// This copies the whole storage, so its cost grows with the size of the storage,
    /// not with the number of pending changes.
    fn commit(&self) -> StoreResult<()> {
        let mut conn = self.write()?;
        let n = conn.journal.len();
        if let Some(shared) = conn.attached.as_ref().map(|a| a.shared.clone()) {
            let mut data = shared
                .write()
                .map_err(|_| StoreError::io("shared storage lock poisoned"))?;
            let mut removed = false;
            for change in &conn.journal {
                match change {
                    Change::Added(q) => {
                        data.insert(q)?;
                    }
                    Change::Removed(q) => {
                        removed |= data.remove(q);
                    }
                }
            }
            // the working copy is rebuilt anyway, so unused terms are dropped on the way
            if removed {
                *data = data.compact()?;
            }
            let refreshed = data.clone();
            drop(data);
            conn.working = refreshed;
        }
        conn.journal.clear();
        log::debug!("{} committed {} change(s)", self.identifier, n);
        Ok(())
    }

    fn rollback(&self) -> StoreResult<()> {
        let mut conn = self.write()?;
        let n = conn.journal.len();
        conn.undo()?;
        log::debug!("{} rolled back {} change(s)", self.identifier, n);
        Ok(())
    }
}
