//! Root scope.
//!
//! Entry point of the state tree. Defines no transitions of its own; it
//! only wraps the collection scope and routes intents down.

mod intent;
mod reducer;
mod state;

pub use intent::AppIntent;
pub use reducer::AppReducer;
pub use state::AppState;
