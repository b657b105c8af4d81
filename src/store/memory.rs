use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use super::{Connector, Document, DocumentCollection, StoreClient, StoreError};

/// In-process document store. Clones share the same data.
///
/// Selected with a `memory://` URI for running without a database; the
/// documents live only as long as the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    /// (database, collection) -> documents in insertion order
    collections: DashMap<(String, String), Vec<(String, Document)>>,
    connects: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times a client has been built through `Connector::connect`.
    pub fn connect_count(&self) -> usize {
        self.inner.connects.load(Ordering::SeqCst)
    }

    /// Stored documents with their ids, oldest first.
    pub fn documents(&self, database: &str, collection: &str) -> Vec<(String, Document)> {
        self.inner
            .collections
            .get(&(database.to_string(), collection.to_string()))
            .map(|docs| docs.value().clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Connector for MemoryStore {
    async fn connect(&self, _uri: &str) -> Result<Arc<dyn StoreClient>, StoreError> {
        self.inner.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.clone()))
    }
}

impl StoreClient for MemoryStore {
    fn collection(&self, database: &str, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(MemoryCollection {
            store: self.clone(),
            key: (database.to_string(), name.to_string()),
        })
    }
}

struct MemoryCollection {
    store: MemoryStore,
    key: (String, String),
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn insert_one(&self, doc: Document) -> Result<String, StoreError> {
        let id = Uuid::now_v7().to_string();
        self.store
            .inner
            .collections
            .entry(self.key.clone())
            .or_default()
            .push((id.clone(), doc));
        Ok(id)
    }
}
