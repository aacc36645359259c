//! A registry of named in-memory storages.
//!
//! A [`MemoryStore`](crate::MemoryStore) connected to a locator shares its committed data
//! with every other store connected to the same locator in the same registry.
use crate::index::QuadIndex;
use lazy_static::lazy_static;
use rdfstore_api::store::{StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// The committed data of a storage, shared by all its connections.
pub type SharedData = Arc<RwLock<QuadIndex>>;

#[derive(Debug)]
struct Storage {
    data: SharedData,
    handles: usize,
}

/// A set of named storages, with a count of the stores connected to each of them.
#[derive(Debug, Default)]
pub struct Registry {
    storages: Mutex<HashMap<String, Storage>>,
}

lazy_static! {
    static ref GLOBAL: Arc<Registry> = Arc::new(Registry::new());
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, used by stores built with [`MemoryStore::new`](crate::MemoryStore::new).
    pub fn global() -> Arc<Registry> {
        GLOBAL.clone()
    }

    /// Register a new connection to the storage at `locator`,
    /// creating the storage if needed and `create` is true.
    pub fn attach(&self, locator: &str, create: bool) -> StoreResult<SharedData> {
        let mut storages = self.lock()?;
        match storages.get_mut(locator) {
            Some(storage) => {
                storage.handles += 1;
                Ok(storage.data.clone())
            }
            None if create => {
                log::debug!("creating storage {locator}");
                let data = SharedData::default();
                storages.insert(
                    locator.to_string(),
                    Storage {
                        data: data.clone(),
                        handles: 1,
                    },
                );
                Ok(data)
            }
            None => Err(StoreError::NotFound {
                locator: locator.to_string(),
            }),
        }
    }

    /// Unregister a connection to the storage at `locator`.
    ///
    /// The storage itself survives, even with no connection left.
    pub fn detach(&self, locator: &str) -> StoreResult<()> {
        let mut storages = self.lock()?;
        if let Some(storage) = storages.get_mut(locator) {
            storage.handles = storage.handles.saturating_sub(1);
        }
        Ok(())
    }

    /// Erase the storage at `locator`.
    ///
    /// `own` tells whether the caller itself holds one of the connections to that storage;
    /// any other connection makes the storage busy.
    pub fn destroy(&self, locator: &str, own: bool) -> StoreResult<()> {
        let mut storages = self.lock()?;
        let storage = storages.get(locator).ok_or_else(|| StoreError::NotFound {
            locator: locator.to_string(),
        })?;
        let others = storage.handles - usize::from(own && storage.handles > 0);
        if others > 0 {
            return Err(StoreError::Busy {
                locator: locator.to_string(),
            });
        }
        storages.remove(locator);
        log::debug!("destroyed storage {locator}");
        Ok(())
    }

    pub fn contains(&self, locator: &str) -> StoreResult<bool> {
        Ok(self.lock()?.contains_key(locator))
    }

    /// The locators of all storages in this registry, sorted.
    pub fn locators(&self) -> StoreResult<Vec<String>> {
        let mut ret: Vec<String> = self.lock()?.keys().cloned().collect();
        ret.sort();
        Ok(ret)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, Storage>>> {
        self.storages
            .lock()
            .map_err(|_| StoreError::io("storage registry lock poisoned"))
    }
}
