#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use formdrop::config::{Config, StoreConfig};
use formdrop::store::memory::MemoryStore;
use formdrop::store::{Connector, Document, DocumentCollection, StoreClient, StoreError, StoreManager};

pub const TEST_DB: &str = "formdrop_test";
pub const TEST_COLLECTION: &str = "entries";

/// A running test server backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: MemoryStore,
    pub data_file: PathBuf,
    // Keeps the data directory alive for the duration of the test
    _data_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Documents persisted so far, oldest first.
    pub fn documents(&self) -> Vec<Document> {
        self.store
            .documents(TEST_DB, TEST_COLLECTION)
            .into_iter()
            .map(|(_, doc)| doc)
            .collect()
    }

    pub fn write_data_file(&self, contents: &str) {
        std::fs::write(&self.data_file, contents).expect("write data file");
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed")
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self.get(path).await;
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a JSON body to `/submit`.
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body to `/submit` with the given content type.
    pub async fn submit_raw(&self, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST form fields to `/submittodoitem`.
    pub async fn todo_form(&self, fields: &[(&str, &str)], accept: &str) -> Response {
        self.client
            .post(self.url("/submittodoitem"))
            .header("accept", accept)
            .form(fields)
            .send()
            .await
            .expect("todo form request failed")
    }

    /// POST a JSON body to `/submittodoitem`.
    pub async fn todo_json(&self, data: &Value, accept: &str) -> Response {
        self.client
            .post(self.url("/submittodoitem"))
            .header("accept", accept)
            .json(data)
            .send()
            .await
            .expect("todo json request failed")
    }
}

pub fn test_config(store: StoreConfig, data_file: PathBuf) -> Config {
    Config {
        store,
        secret_key: "test-secret".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        data_file,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        max_body_size: 64 * 1024,
        log_level: "warn".to_string(),
    }
}

pub fn configured_store() -> StoreConfig {
    StoreConfig {
        uri: Some("memory://test".to_string()),
        database: TEST_DB.to_string(),
        collection: TEST_COLLECTION.to_string(),
    }
}

pub fn unconfigured_store() -> StoreConfig {
    StoreConfig {
        uri: None,
        ..configured_store()
    }
}

/// Spawn an app whose store is configured and backed by memory.
pub async fn spawn_app() -> TestApp {
    let memory = MemoryStore::new();
    spawn_with(configured_store(), Arc::new(memory.clone()), memory).await
}

/// Spawn an app with no store URI.
pub async fn spawn_unconfigured_app() -> TestApp {
    let memory = MemoryStore::new();
    spawn_with(unconfigured_store(), Arc::new(memory.clone()), memory).await
}

/// Spawn an app whose store accepts connections but fails every write.
pub async fn spawn_failing_store_app() -> TestApp {
    spawn_with(configured_store(), Arc::new(FailingStore), MemoryStore::new()).await
}

pub async fn spawn_with(
    store_config: StoreConfig,
    connector: Arc<dyn Connector>,
    memory: MemoryStore,
) -> TestApp {
    let data_dir = tempfile::tempdir().expect("create temp dir");
    let data_file = data_dir.path().join("data.json");

    let config = test_config(store_config.clone(), data_file.clone());
    let app = formdrop::build_app(StoreManager::new(store_config, connector), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store: memory,
        data_file,
        _data_dir: data_dir,
    }
}

pub const WRITE_FAILURE: &str = "connection refused by test store";

/// Store whose writes always fail, like an unreachable server.
pub struct FailingStore;

#[async_trait]
impl Connector for FailingStore {
    async fn connect(&self, _uri: &str) -> Result<Arc<dyn StoreClient>, StoreError> {
        Ok(Arc::new(FailingStore))
    }
}

impl StoreClient for FailingStore {
    fn collection(&self, _database: &str, _name: &str) -> Arc<dyn DocumentCollection> {
        Arc::new(FailingStore)
    }
}

#[async_trait]
impl DocumentCollection for FailingStore {
    async fn insert_one(&self, _doc: Document) -> Result<String, StoreError> {
        Err(WRITE_FAILURE.into())
    }
}

/// The `name=value` pair of a `set-cookie` header, if the response sets `name`.
pub fn set_cookie_pair(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{name}=")))
        .map(str::to_string)
}

pub fn location(resp: &Response) -> Option<String> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
