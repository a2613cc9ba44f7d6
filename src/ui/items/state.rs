use crate::item::Item;
use crate::ui::edit::EditItemState;
use crate::ui::item::ItemState;
use crate::ui::mvi::UiState;
use uuid::Uuid;

/// State of the deck collection.
///
/// `item_states` is ordered (insertion order = display order) and keyed by
/// item id; ids are unique. `edit_item_state` holds the at-most-one active
/// edit session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemsState {
    pub item_states: Vec<ItemState>,
    pub edit_item_state: Option<EditItemState>,
}

impl UiState for ItemsState {}

impl ItemsState {
    /// Build the collection from seed items, preserving order.
    pub fn seeded(items: Vec<Item>) -> Self {
        Self {
            item_states: items.into_iter().map(ItemState::new).collect(),
            edit_item_state: None,
        }
    }

    /// True while a modal edit session exists. Drives modal visibility.
    pub fn is_editing(&self) -> bool {
        self.edit_item_state.is_some()
    }

    /// Look up an entry by id.
    pub fn item_state(&self, id: Uuid) -> Option<&ItemState> {
        self.item_states.iter().find(|state| state.id() == id)
    }

    /// Position of an entry by id, if present.
    pub(crate) fn position(&self, id: Uuid) -> Option<usize> {
        self.item_states.iter().position(|state| state.id() == id)
    }
}
