//! Typed client for the directory API.
//!
//! One method per operation contract, returning the same shapes the
//! server produces. The error Display string is what the UI shows
//! verbatim when an operation fails.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{User, UserDraft, UserPatch};

/// Errors from directory API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },
}

/// JSON error body produced by the API server.
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users`
    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    /// `POST /users`
    pub async fn add_user(&self, draft: &UserDraft) -> Result<User, ClientError> {
        let resp = self
            .http
            .post(format!("{}/users", self.base_url))
            .json(draft)
            .send()
            .await?;
        decode(resp).await
    }

    /// `PATCH /users/{id}` — `None` when the id is unknown to the server.
    pub async fn update_user(
        &self,
        id: &str,
        patch: &UserPatch,
    ) -> Result<Option<User>, ClientError> {
        let resp = self
            .http
            .patch(format!("{}/users/{}", self.base_url, id))
            .json(patch)
            .send()
            .await?;
        decode(resp).await
    }

    /// `DELETE /users/{id}` — `true` iff a record was removed.
    pub async fn delete_user(&self, id: &str) -> Result<bool, ClientError> {
        let resp = self
            .http
            .delete(format!("{}/users/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }
}

/// Decode a success body, or convert an error status into
/// [`ClientError::Status`] using the server's JSON error body when it has
/// one.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => default_status_message(status),
    };
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

fn default_status_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
