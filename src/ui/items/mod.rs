//! Collection scope.
//!
//! Owns the ordered, id-keyed collection of item states plus the optional
//! edit session, and orchestrates the edit flow: copy-on-open,
//! merge-on-dismiss. Also routes id-tagged intents to the per-item scope
//! and edit-tagged intents to the session while one exists.

mod intent;
mod reducer;
mod state;

pub use intent::ItemsIntent;
pub use reducer::ItemsReducer;
pub use state::ItemsState;
