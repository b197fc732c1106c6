//! Unidirectional data-flow primitives for the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Intents are user actions or the results of asynchronous API calls;
//! reducers are the only place state transitions happen.

/// Marker trait for UI state values.
///
/// States are immutable — a reducer consumes the old value and returns a
/// new one — self-contained, and comparable so the view can detect
/// changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: key presses, submissions, and the success or
/// failure outcomes of effect tasks.
pub trait Intent: Send + 'static {}

/// Pure state-transition function over a (State, Intent) pair.
///
/// Reducers must not perform side effects; anything that talks to the
/// network belongs in the effect layer.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
