use crate::ui::item::ItemState;
use crate::ui::mvi::UiState;
use uuid::Uuid;

/// State of an active edit session.
///
/// `item_state` is a working copy, not an alias of the collection entry.
/// It exists only while the modal is open and is reconciled into the
/// collection when the session is dismissed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditItemState {
    pub item_state: ItemState,
}

impl UiState for EditItemState {}

impl EditItemState {
    /// Open a session over a snapshot of the target item state.
    pub fn new(item_state: ItemState) -> Self {
        Self { item_state }
    }

    /// Id of the item this session is editing.
    pub fn id(&self) -> Uuid {
        self.item_state.id()
    }

    /// Current working-copy name, as bound by the editor field.
    pub fn name(&self) -> &str {
        &self.item_state.item.name
    }
}
