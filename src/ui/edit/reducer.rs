use crate::ui::mvi::Reducer;

use super::intent::EditIntent;
use super::state::EditItemState;

/// Reducer for the edit session scope.
///
/// Only ever touches the working copy; the merge back into the collection
/// happens in the collection scope on dismiss.
pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditItemState;
    type Intent = EditIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditIntent::SetName(name) => {
                state.item_state.item.name = name;
                state
            }
        }
    }
}
