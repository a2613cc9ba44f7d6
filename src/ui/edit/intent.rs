use crate::ui::mvi::Intent;

/// Intents scoped to the active edit session.
#[derive(Debug, Clone)]
pub enum EditIntent {
    /// Replace the working copy's name with the given text.
    /// Any text is accepted, including empty; this cannot fail.
    SetName(String),
}

impl Intent for EditIntent {}
