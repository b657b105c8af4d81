pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::config::StoreConfig;

/// A schema-less document: string keys to arbitrary JSON values.
pub type Document = Map<String, Value>;

#[derive(Debug, Clone)]
pub struct StoreError {
    pub message: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError { message: s }
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError {
            message: s.to_string(),
        }
    }
}

/// Builds a store client from a connection URI.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, uri: &str) -> Result<Arc<dyn StoreClient>, StoreError>;
}

pub trait StoreClient: Send + Sync {
    fn collection(&self, database: &str, name: &str) -> Arc<dyn DocumentCollection>;
}

#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Persist one document and return its generated id.
    async fn insert_one(&self, doc: Document) -> Result<String, StoreError>;
}

pub const MEMORY_SCHEME: &str = "memory://";

/// The connector matching the configured URI: `memory://` keeps documents
/// in process, anything else goes through the MongoDB driver.
pub fn connector_for(uri: Option<&str>) -> Arc<dyn Connector> {
    match uri {
        Some(uri) if uri.starts_with(MEMORY_SCHEME) => Arc::new(memory::MemoryStore::new()),
        _ => Arc::new(mongo::MongoConnector),
    }
}

/// Owns the process-wide store client.
///
/// The client is created on the first `collection()` call and reused for
/// every call after that. Concurrent first callers all wait on the same
/// initialisation, so at most one client is ever built.
pub struct StoreManager {
    config: StoreConfig,
    connector: Arc<dyn Connector>,
    client: OnceCell<Arc<dyn StoreClient>>,
}

impl StoreManager {
    pub fn new(config: StoreConfig, connector: Arc<dyn Connector>) -> Self {
        Self {
            config,
            connector,
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The configured collection, or `None` when no URI is configured.
    ///
    /// Reachability is not checked here; an unreachable store surfaces on
    /// the first operation against the returned handle.
    pub async fn collection(&self) -> Result<Option<Arc<dyn DocumentCollection>>, StoreError> {
        let Some(uri) = self.config.uri.as_deref() else {
            return Ok(None);
        };

        let client = self
            .client
            .get_or_try_init(|| async move {
                let client = self.connector.connect(uri).await?;
                tracing::info!(
                    "Store client created for {}/{}",
                    self.config.database,
                    self.config.collection
                );
                Ok::<_, StoreError>(client)
            })
            .await?;

        Ok(Some(
            client.collection(&self.config.database, &self.config.collection),
        ))
    }
}
