use crate::ui::items::ItemsReducer;
use crate::ui::mvi::Reducer;

use super::intent::AppIntent;
use super::state::AppState;

/// Root reducer: pure composition, no transitions of its own.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Items(intent) => AppState {
                items: ItemsReducer::reduce(state.items, intent),
            },
        }
    }
}
