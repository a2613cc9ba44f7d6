use crate::item::Item;
use crate::ui::mvi::UiState;
use uuid::Uuid;

/// State slice for a single deck entry.
///
/// Identity comes from the wrapped item; the collection uses it as key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemState {
    pub item: Item,
}

impl UiState for ItemState {}

impl ItemState {
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    pub fn id(&self) -> Uuid {
        self.item.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_follows_wrapped_item() {
        let item = Item::new("thing");
        let expected = item.id;
        assert_eq!(ItemState::new(item).id(), expected);
    }
}
