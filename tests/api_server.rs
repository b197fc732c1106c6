//! End-to-end tests against a live server over a temp store.

mod common;

use common::{spawn_server, user};
use reqwest::Client;
use roster::model::User;

#[tokio::test]
async fn health_reports_ok() {
    let (addr, _handle, _dir) = spawn_server(&[]).await;

    let resp = Client::new()
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "roster");
}

#[tokio::test]
async fn list_returns_the_seeded_users() {
    let (addr, _handle, _dir) = spawn_server(&[user("1", "Ada"), user("2", "Bob")]).await;

    let users: Vec<User> = Client::new()
        .get(format!("http://{addr}/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Ada");
}

#[tokio::test]
async fn add_assigns_the_next_id() {
    let (addr, _handle, _dir) = spawn_server(&[user("41", "Ada")]).await;

    let created: User = Client::new()
        .post(format!("http://{addr}/users"))
        .json(&serde_json::json!({
            "name": "Bob",
            "email": "b@x.com",
            "role": "admin",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(created.id, "42");
    assert_eq!(created.role, "admin");
}

#[tokio::test]
async fn add_rejects_a_draft_with_missing_fields() {
    let (addr, _handle, _dir) = spawn_server(&[]).await;

    let resp = Client::new()
        .post(format!("http://{addr}/users"))
        .json(&serde_json::json!({ "name": "NoEmail" }))
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn update_merges_and_echoes_the_record() {
    let (addr, _handle, _dir) = spawn_server(&[user("1", "Ada")]).await;

    let updated: Option<User> = Client::new()
        .patch(format!("http://{addr}/users/1"))
        .json(&serde_json::json!({ "role": "admin" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let updated = updated.unwrap();
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.role, "admin");
}

#[tokio::test]
async fn update_of_an_unknown_id_returns_null() {
    let (addr, _handle, _dir) = spawn_server(&[]).await;

    let resp = Client::new()
        .patch(format!("http://{addr}/users/99"))
        .json(&serde_json::json!({ "name": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "null");
}

#[tokio::test]
async fn delete_reports_whether_something_was_removed() {
    let (addr, _handle, _dir) = spawn_server(&[user("1", "Ada")]).await;
    let client = Client::new();

    let removed: bool = client
        .delete(format!("http://{addr}/users/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(removed);

    let removed_again: bool = client
        .delete(format!("http://{addr}/users/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!removed_again);
}

#[tokio::test]
async fn graceful_shutdown_stops_the_server() {
    let (addr, handle, _dir) = spawn_server(&[]).await;
    handle.shutdown();
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    let result = Client::new()
        .get(format!("http://{addr}/health"))
        .send()
        .await;
    assert!(result.is_err());
}
