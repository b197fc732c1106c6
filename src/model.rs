//! Shared record types for the user directory.
//!
//! These types are the wire format of the API, the persistence format of
//! the store, and the in-memory shape the UI caches — one definition for
//! all three.

use serde::{Deserialize, Serialize};

/// A directory record. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Payload for creating a user. All fields required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Partial update payload. Absent fields are left untouched; the id is
/// carried separately and is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserPatch {
    /// Merge the present fields of this patch into `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = &self.role {
            user.role = role.clone();
        }
    }
}

impl From<UserDraft> for UserPatch {
    fn from(draft: UserDraft) -> Self {
        Self {
            name: Some(draft.name),
            email: Some(draft.email),
            role: Some(draft.role),
        }
    }
}
