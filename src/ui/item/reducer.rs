use crate::ui::mvi::Reducer;

use super::intent::ItemIntent;
use super::state::ItemState;

/// Reducer for the per-item scope.
pub struct ItemReducer;

impl Reducer for ItemReducer {
    type State = ItemState;
    type Intent = ItemIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        // ItemIntent has no variants, so there is nothing to transition.
        match intent {}
    }
}
