//! Domain value type for a single deck entry.

use uuid::Uuid;

/// A named entry in the deck.
///
/// The id is assigned at creation and never changes afterwards; it is the
/// key every scoped intent and collection lookup is routed by.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Create an item with an explicit id (seed data with stable ids).
    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_distinct_ids() {
        let a = Item::new("a");
        let b = Item::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn with_id_keeps_given_id() {
        let id = Uuid::new_v4();
        let item = Item::with_id(id, "fixed");
        assert_eq!(item.id, id);
        assert_eq!(item.name, "fixed");
    }
}
