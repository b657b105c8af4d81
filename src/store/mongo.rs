use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, Bson};
use mongodb::{Client, Collection};

use super::{Connector, Document, DocumentCollection, StoreClient, StoreError};

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError {
            message: err.to_string(),
        }
    }
}

/// Connects through the MongoDB driver.
///
/// `Client::with_uri_str` only parses the URI (and resolves SRV records);
/// no server round trip happens until the first operation.
pub struct MongoConnector;

#[async_trait]
impl Connector for MongoConnector {
    async fn connect(&self, uri: &str) -> Result<Arc<dyn StoreClient>, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Arc::new(MongoClient { client }))
    }
}

pub struct MongoClient {
    client: Client,
}

impl StoreClient for MongoClient {
    fn collection(&self, database: &str, name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(MongoCollection {
            inner: self.client.database(database).collection(name),
        })
    }
}

pub struct MongoCollection {
    inner: Collection<bson::Document>,
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn insert_one(&self, doc: Document) -> Result<String, StoreError> {
        let doc = to_bson_document(&doc)?;
        let result = self.inner.insert_one(doc).await?;
        Ok(id_to_string(&result.inserted_id))
    }
}

pub fn to_bson_document(doc: &Document) -> Result<bson::Document, StoreError> {
    bson::to_document(doc).map_err(|e| format!("Invalid document: {e}").into())
}

pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
