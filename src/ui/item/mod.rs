//! Per-item scope.
//!
//! Holds the state slice for one deck entry. No per-item transitions are
//! defined yet; the scope exists so collection-level routing has a child
//! to forward to once item-level behavior (rename in place, flags) is
//! added.

mod intent;
mod reducer;
mod state;

pub use intent::ItemIntent;
pub use reducer::ItemReducer;
pub use state::ItemState;
