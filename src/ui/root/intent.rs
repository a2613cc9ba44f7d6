use crate::ui::items::ItemsIntent;
use crate::ui::mvi::Intent;

/// Intents accepted at the root of the state tree.
#[derive(Debug, Clone)]
pub enum AppIntent {
    Items(ItemsIntent),
}

impl Intent for AppIntent {}
