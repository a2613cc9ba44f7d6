use crate::ui::mvi::Intent;

/// Intents scoped to a single deck entry.
///
/// Deliberately uninhabited: no mutation is defined for an item in
/// isolation today. Routing from the collection scope still exists so
/// adding a variant here is the only change needed for new per-item
/// behavior.
#[derive(Debug, Clone)]
pub enum ItemIntent {}

impl Intent for ItemIntent {}
