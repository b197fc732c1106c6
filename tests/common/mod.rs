//! Shared test utilities.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use roster::api::{ApiServer, ServerHandle};
use roster::model::User;
use roster::store::FileStore;

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role: "user".to_string(),
    }
}

/// Write a record file holding `users` and return its path inside the
/// temp dir.
pub fn seed_store(dir: &TempDir, users: &[User]) -> PathBuf {
    let path = dir.path().join("users.json");
    let json = serde_json::to_string_pretty(users).expect("serialize seed users");
    std::fs::write(&path, json).expect("write seed file");
    path
}

/// Spin up a server on an ephemeral port over a seeded temp store.
///
/// The TempDir must be kept alive for the duration of the test.
pub async fn spawn_server(users: &[User]) -> (SocketAddr, ServerHandle, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let path = seed_store(&dir, users);
    let store = Arc::new(FileStore::open(path).expect("open store"));

    let mut server = ApiServer::new(store);
    // Bind before spawning so the address is usable immediately.
    let addr = server.try_bind("127.0.0.1:0").await.expect("bind");
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, handle, dir)
}
