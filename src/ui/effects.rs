//! Effect layer: turns request intents into API calls.
//!
//! Each request spawns one tokio task that performs exactly one
//! [`DirectoryClient`] call and emits exactly one result intent back to
//! the event loop. Results are tagged with a per-operation generation so
//! stale results from superseded dispatches are ignored — latest wins,
//! per operation kind; operations of different kinds never supersede
//! each other.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::client::DirectoryClient;
use crate::ui::events::AppEvent;
use crate::ui::users::UsersIntent;

/// The four independent operation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl OpKind {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            OpKind::Fetch => 0,
            OpKind::Create => 1,
            OpKind::Update => 2,
            OpKind::Delete => 3,
        }
    }

    /// The kind a request intent belongs to; results carry their tag
    /// from dispatch instead.
    pub fn of_request(intent: &UsersIntent) -> Option<Self> {
        match intent {
            UsersIntent::Fetch => Some(OpKind::Fetch),
            UsersIntent::Create(_) => Some(OpKind::Create),
            UsersIntent::Update { .. } => Some(OpKind::Update),
            UsersIntent::Delete { .. } => Some(OpKind::Delete),
            _ => None,
        }
    }
}

/// Per-kind generation counters implementing the latest-wins policy.
#[derive(Debug, Default)]
pub struct EffectTracker {
    generations: [u64; OpKind::COUNT],
}

impl EffectTracker {
    /// Start a new dispatch for `kind`, superseding any in-flight one.
    pub fn begin(&mut self, kind: OpKind) -> u64 {
        let slot = &mut self.generations[kind.index()];
        *slot += 1;
        *slot
    }

    /// Whether a result from `generation` is still the latest for `kind`.
    pub fn accepts(&self, kind: OpKind, generation: u64) -> bool {
        self.generations[kind.index()] == generation
    }
}

/// Spawns effect tasks and tracks their generations.
pub struct EffectRunner {
    client: Arc<DirectoryClient>,
    runtime: tokio::runtime::Handle,
    events: Sender<AppEvent>,
    tracker: EffectTracker,
}

impl EffectRunner {
    pub fn new(
        client: Arc<DirectoryClient>,
        runtime: tokio::runtime::Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            client,
            runtime,
            events,
            tracker: EffectTracker::default(),
        }
    }

    /// Whether a tagged result should still be applied.
    pub fn accepts(&self, kind: OpKind, generation: u64) -> bool {
        self.tracker.accepts(kind, generation)
    }

    /// Spawn the API call for a request intent. Result intents are
    /// ignored here; they come back through the event channel.
    pub fn dispatch(&mut self, intent: &UsersIntent) {
        let Some(kind) = OpKind::of_request(intent) else {
            return;
        };
        let generation = self.tracker.begin(kind);
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        let intent = intent.clone();

        self.runtime.spawn(async move {
            let outcome = perform(&client, intent).await;
            // The UI side may already be gone during shutdown.
            let _ = events.send(AppEvent::EffectResult {
                kind,
                generation,
                intent: outcome,
            });
        });
    }
}

/// Run one API call and fold its outcome into a single result intent.
///
/// A not-found update or delete is reported as a failure: the server's
/// `null`/`false` answer means the cached list was already stale, and a
/// success intent the reducer cannot apply would hide that.
async fn perform(client: &DirectoryClient, intent: UsersIntent) -> UsersIntent {
    match intent {
        UsersIntent::Fetch => match client.users().await {
            Ok(list) => UsersIntent::Fetched(list),
            Err(err) => UsersIntent::Failed(err.to_string()),
        },
        UsersIntent::Create(draft) => match client.add_user(&draft).await {
            Ok(user) => UsersIntent::Created(user),
            Err(err) => UsersIntent::Failed(err.to_string()),
        },
        UsersIntent::Update { id, patch } => match client.update_user(&id, &patch).await {
            Ok(Some(user)) => UsersIntent::Updated(user),
            Ok(None) => UsersIntent::Failed(format!("user {id} not found")),
            Err(err) => UsersIntent::Failed(err.to_string()),
        },
        UsersIntent::Delete { id } => match client.delete_user(&id).await {
            Ok(true) => UsersIntent::Deleted { id },
            Ok(false) => UsersIntent::Failed(format!("user {id} not found")),
            Err(err) => UsersIntent::Failed(err.to_string()),
        },
        // Result intents never reach dispatch(); nothing to perform.
        other => other,
    }
}
