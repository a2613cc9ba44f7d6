//! Modal edit scope.
//!
//! An edit session wraps a working copy of the item state being edited.
//! The copy is deliberate: the session must be able to change the name
//! without the main collection seeing it until the session is dismissed
//! and merged back by the collection scope.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_edit_dialog;
pub use intent::EditIntent;
pub use reducer::EditReducer;
pub use state::EditItemState;
