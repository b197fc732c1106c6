//! Route table and handlers for the directory API.
//!
//! The contracts mirror the operations exactly:
//!
//! ```text
//! GET    /users        -> [User]
//! POST   /users        -> User          (draft in body)
//! PATCH  /users/{id}   -> User | null   (null when the id is absent)
//! DELETE /users/{id}   -> bool          (true iff a record was removed)
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};

use crate::api::error::ApiError;
use crate::model::{User, UserDraft, UserPatch};
use crate::store::FileStore;

pub fn build_router(store: Arc<FileStore>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(add_user))
        .route("/users/{id}", patch(update_user).delete(delete_user))
        .with_state(store)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "roster",
    }))
}

async fn list_users(State(store): State<Arc<FileStore>>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(store.list()))
}

async fn add_user(
    State(store): State<Arc<FileStore>>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<User>, ApiError> {
    let user = store.add(draft)?;
    tracing::info!(id = %user.id, "user created");
    Ok(Json(user))
}

async fn update_user(
    State(store): State<Arc<FileStore>>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<Option<User>>, ApiError> {
    let updated = store.update(&id, &patch)?;
    if updated.is_none() {
        tracing::info!(id, "update target not found");
    }
    Ok(Json(updated))
}

async fn delete_user(
    State(store): State<Arc<FileStore>>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let removed = store.delete(&id)?;
    if !removed {
        tracing::info!(id, "delete target not found");
    }
    Ok(Json(removed))
}
