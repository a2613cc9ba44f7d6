//! Process-wide state container.
//!
//! Owns the root state and is the only mutation path into it: the view
//! layer dispatches intents, the store runs the root reducer, then every
//! subscriber is notified with the fully applied state. Dispatch is
//! synchronous and single-threaded, so one intent resolves completely
//! before the next is accepted and no observer ever sees a partially
//! applied transition.

use crate::item::Item;
use crate::ui::items::ItemsState;
use crate::ui::mvi::Reducer;
use crate::ui::root::{AppIntent, AppReducer, AppState};

type Subscriber = Box<dyn FnMut(&AppState)>;

pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Build a store whose collection is populated from seed items, in
    /// the given order.
    pub fn seeded(items: Vec<Item>) -> Self {
        Self::new(AppState::new(ItemsState::seeded(items)))
    }

    /// Current state of the tree.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register an observer called after every dispatch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Run one intent through the root reducer and notify subscribers.
    pub fn dispatch(&mut self, intent: AppIntent) {
        tracing::debug!(?intent, "dispatch");
        self.state = AppReducer::reduce(std::mem::take(&mut self.state), intent);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::edit::EditIntent;
    use crate::ui::items::ItemsIntent;
    use std::cell::Cell;
    use std::rc::Rc;

    fn seeded_store(names: &[&str]) -> Store {
        Store::seeded(names.iter().map(|name| Item::new(*name)).collect())
    }

    #[test]
    fn seeded_store_exposes_items_in_order() {
        let store = seeded_store(&["a", "b"]);
        let names: Vec<_> = store
            .state()
            .items
            .item_states
            .iter()
            .map(|s| s.item.name.clone())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn dispatch_notifies_every_subscriber() {
        let mut store = seeded_store(&["a"]);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        store.subscribe(move |_| counter.set(counter.get() + 1));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| counter.set(counter.get() + 1));

        store.dispatch(AppIntent::Items(ItemsIntent::EditItemDismissed));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn subscribers_see_post_reduce_state() {
        let mut store = seeded_store(&["a"]);
        let snapshot = store.state().items.item_states[0].clone();
        let observed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&observed);
        store.subscribe(move |state| flag.set(state.items.is_editing()));

        store.dispatch(AppIntent::Items(ItemsIntent::ShowEditItem(snapshot)));
        assert!(observed.get());
    }

    #[test]
    fn edit_scoped_dispatch_without_session_changes_nothing() {
        let mut store = seeded_store(&["a"]);
        let before = store.state().clone();
        store.dispatch(AppIntent::Items(ItemsIntent::Edit(EditIntent::SetName(
            "ignored".to_string(),
        ))));
        assert_eq!(store.state(), &before);
    }
}
