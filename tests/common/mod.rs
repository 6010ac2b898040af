use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use rfpd::config::{Config, UpdateMode};
use rfpd::db::SqliteStore;

/// Layout of the pre-provisioned table the server expects.
pub const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS rfps (
    id TEXT PRIMARY KEY,
    carrier_name TEXT,
    date_submitted DATETIME,
    employee_count INTEGER,
    misc_data TEXT
)";

/// A running test server backed by a private in-memory SQLite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST /rfps with a JSON body, return (body, status).
    pub async fn create(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/rfps"))
            .json(body)
            .send()
            .await
            .expect("create request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST /rfps, assert 201, return the created record.
    pub async fn create_ok(&self, body: &Value) -> Value {
        let (created, status) = self.create(body).await;
        assert_eq!(status, StatusCode::CREATED, "create non-201: {created}");
        created
    }

    /// Send a raw (possibly malformed) body with the given method.
    pub async fn send_raw(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &'static str,
    ) -> (Value, StatusCode) {
        let resp = self
            .client
            .request(method, self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("raw request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn put(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// DELETE, return (raw body text, status).
    pub async fn delete(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }

    pub async fn row_count(&self) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rfps")
            .fetch_one(&self.pool)
            .await
            .expect("count query failed");
        row.0
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

/// Spawn a test app in permissive update mode.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_strict_app() -> TestApp {
    spawn_app_with(Config {
        update_mode: UpdateMode::Strict,
        ..test_config()
    })
    .await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    // A single long-lived connection keeps the in-memory database alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&config.database_url)
        .await
        .expect("Failed to open in-memory database");

    sqlx::query(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to provision rfps table");

    let app = rfpd::build_app(Arc::new(SqliteStore::new(pool.clone())), &config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
    }
}
