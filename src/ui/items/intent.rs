use crate::ui::edit::EditIntent;
use crate::ui::item::{ItemIntent, ItemState};
use crate::ui::mvi::Intent;
use uuid::Uuid;

/// Intents scoped to the deck collection.
#[derive(Debug, Clone)]
pub enum ItemsIntent {
    /// Open a modal edit session over a snapshot of the given item state.
    /// Issuing this while a session is already active replaces the
    /// previous uncommitted session (last writer wins).
    ShowEditItem(ItemState),

    /// Close the modal. The session's working copy is merged back into
    /// the collection entry with the matching id before the session is
    /// cleared; if the id is gone, the merge is silently skipped.
    EditItemDismissed,

    /// An intent for the entry with the given id.
    Item { id: Uuid, intent: ItemIntent },

    /// An intent for the active edit session. Dropped silently when no
    /// session exists.
    Edit(EditIntent),
}

impl Intent for ItemsIntent {}
