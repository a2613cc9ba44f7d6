use crate::ui::edit::{EditItemState, EditReducer};
use crate::ui::item::ItemReducer;
use crate::ui::mvi::Reducer;

use super::intent::ItemsIntent;
use super::state::ItemsState;

/// Reducer for the deck collection.
///
/// Composes three responsibilities: forwarding edit-scoped intents to the
/// session reducer, forwarding id-tagged intents to the per-item reducer,
/// and the open/dismiss orchestration of the edit flow itself.
pub struct ItemsReducer;

impl Reducer for ItemsReducer {
    type State = ItemsState;
    type Intent = ItemsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ItemsIntent::ShowEditItem(snapshot) => {
                // Replaces any previous uncommitted session.
                state.edit_item_state = Some(EditItemState::new(snapshot));
                state
            }

            ItemsIntent::EditItemDismissed => {
                // Child-to-parent propagation is not automatic in this
                // pattern: merge the working copy back into the matching
                // collection entry before clearing the session. A vanished
                // id skips the merge; the entry is never reinserted.
                if let Some(session) = state.edit_item_state.take() {
                    let edited = session.item_state;
                    if let Some(pos) = state.position(edited.id()) {
                        state.item_states[pos] = edited;
                    }
                }
                state
            }

            ItemsIntent::Item { id, intent } => {
                // Unknown id: no-op.
                if let Some(pos) = state.position(id) {
                    let entry = std::mem::take(&mut state.item_states[pos]);
                    state.item_states[pos] = ItemReducer::reduce(entry, intent);
                }
                state
            }

            ItemsIntent::Edit(intent) => {
                // Only while a session exists; otherwise the intent is
                // dropped without any observable effect.
                if let Some(session) = state.edit_item_state.take() {
                    state.edit_item_state = Some(EditReducer::reduce(session, intent));
                }
                state
            }
        }
    }
}
