//! Model-View-Intent primitives used by the catalog store.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the presentation layer reads
//! - **Intent**: a user action or the outcome of the catalog fetch
//! - **Reducer**: the single place where state transitions happen

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
