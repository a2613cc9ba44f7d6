use itemdeck::item::Item;
use itemdeck::store::Store;
use itemdeck::ui::edit::EditIntent;
use itemdeck::ui::items::ItemsIntent;
use itemdeck::ui::root::AppIntent;
use std::cell::RefCell;
use std::rc::Rc;

fn seeded_store(names: &[&str]) -> Store {
    Store::seeded(names.iter().map(|name| Item::new(*name)).collect())
}

fn items_intent(intent: ItemsIntent) -> AppIntent {
    AppIntent::Items(intent)
}

#[test]
fn seeded_store_matches_seed_exactly() {
    let store = seeded_store(&["one", "two", "three"]);
    let names: Vec<_> = store
        .state()
        .items
        .item_states
        .iter()
        .map(|s| s.item.name.as_str().to_string())
        .collect();
    assert_eq!(names, vec!["one", "two", "three"]);
}

#[test]
fn every_dispatch_notifies_subscribers_once() {
    let mut store = seeded_store(&["a"]);
    let log: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&log);
    store.subscribe(move |state| sink.borrow_mut().push(state.items.is_editing()));

    let snapshot = store.state().items.item_states[0].clone();
    store.dispatch(items_intent(ItemsIntent::ShowEditItem(snapshot)));
    store.dispatch(items_intent(ItemsIntent::Edit(EditIntent::SetName(
        "renamed".to_string(),
    ))));
    store.dispatch(items_intent(ItemsIntent::EditItemDismissed));

    // One notification per dispatch, each seeing the fully applied state.
    assert_eq!(*log.borrow(), vec![true, true, false]);
}

#[test]
fn observers_never_see_partially_applied_transitions() {
    let mut store = seeded_store(&["a"]);
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    store.subscribe(move |state| {
        // On dismiss, the session must already be cleared AND the merge
        // already applied; there is no in-between state.
        if !state.items.is_editing() {
            sink.borrow_mut()
                .push(state.items.item_states[0].item.name.clone());
        }
    });

    let snapshot = store.state().items.item_states[0].clone();
    store.dispatch(items_intent(ItemsIntent::ShowEditItem(snapshot)));
    store.dispatch(items_intent(ItemsIntent::Edit(EditIntent::SetName(
        "merged".to_string(),
    ))));
    store.dispatch(items_intent(ItemsIntent::EditItemDismissed));

    assert_eq!(*seen.borrow(), vec!["merged"]);
}

#[test]
fn state_reads_reflect_latest_dispatch() {
    let mut store = seeded_store(&["a"]);
    let snapshot = store.state().items.item_states[0].clone();

    assert!(!store.state().items.is_editing());
    store.dispatch(items_intent(ItemsIntent::ShowEditItem(snapshot)));
    assert!(store.state().items.is_editing());
    store.dispatch(items_intent(ItemsIntent::EditItemDismissed));
    assert!(!store.state().items.is_editing());
}
