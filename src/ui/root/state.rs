use crate::ui::items::ItemsState;
use crate::ui::mvi::UiState;

/// Root of the state tree. Lives for the process lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub items: ItemsState,
}

impl UiState for AppState {}

impl AppState {
    pub fn new(items: ItemsState) -> Self {
        Self { items }
    }
}
