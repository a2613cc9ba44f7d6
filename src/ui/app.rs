use crate::store::Store;
use crate::ui::edit::EditIntent;
use crate::ui::item::ItemState;
use crate::ui::items::ItemsIntent;
use crate::ui::root::{AppIntent, AppState};

/// Which screen the body is showing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail,
}

/// View model binding the store to the terminal UI.
///
/// Holds presentation-only state (cursor position, which screen is open,
/// quit flag) outside the state tree; everything the reducers own is read
/// through the store and mutated only by dispatching intents.
pub struct App {
    should_quit: bool,
    screen: Screen,
    selection: usize,
    store: Store,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            should_quit: false,
            screen: Screen::List,
            selection: 0,
            store,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// True while the modal editor is open. Drives modal rendering and
    /// keyboard routing.
    pub fn is_editing(&self) -> bool {
        self.state().items.is_editing()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_item_state(&self) -> Option<&ItemState> {
        self.state().items.item_states.get(self.selection)
    }

    pub fn open_detail(&mut self) {
        if self.selected_item_state().is_some() {
            self.screen = Screen::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.screen = Screen::List;
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.state().items.item_states.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.selection = next;
    }

    /// Open the modal editor over a snapshot of the selected item.
    pub fn open_edit_for_selection(&mut self) {
        let Some(snapshot) = self.selected_item_state().cloned() else {
            return;
        };
        self.dispatch(AppIntent::Items(ItemsIntent::ShowEditItem(snapshot)));
    }

    /// Close the modal editor, merging the working copy back.
    pub fn dismiss_edit(&mut self) {
        self.dispatch(AppIntent::Items(ItemsIntent::EditItemDismissed));
    }

    /// Append a character to the working-copy name.
    pub fn edit_insert_char(&mut self, ch: char) {
        let Some(session) = self.state().items.edit_item_state.as_ref() else {
            return;
        };
        let mut name = session.name().to_string();
        name.push(ch);
        self.dispatch(AppIntent::Items(ItemsIntent::Edit(EditIntent::SetName(
            name,
        ))));
    }

    /// Remove the last character of the working-copy name.
    pub fn edit_delete_char(&mut self) {
        let Some(session) = self.state().items.edit_item_state.as_ref() else {
            return;
        };
        let mut name = session.name().to_string();
        name.pop();
        self.dispatch(AppIntent::Items(ItemsIntent::Edit(EditIntent::SetName(
            name,
        ))));
    }

    pub fn dispatch(&mut self, intent: AppIntent) {
        self.store.dispatch(intent);
    }

    pub fn on_tick(&mut self) {
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.state().items.item_states.len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        if self.selection > len - 1 {
            self.selection = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn make_app(names: &[&str]) -> App {
        App::new(Store::seeded(
            names.iter().map(|name| Item::new(*name)).collect(),
        ))
    }

    #[test]
    fn starts_on_list_screen() {
        let app = make_app(&["a"]);
        assert_eq!(app.screen(), Screen::List);
        assert!(!app.should_quit());
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = make_app(&["a", "b", "c"]);
        app.move_selection(-1);
        assert_eq!(app.selection(), 2);
        app.move_selection(1);
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn selection_on_empty_deck_stays_zero() {
        let mut app = make_app(&[]);
        app.move_selection(1);
        assert_eq!(app.selection(), 0);
        app.move_selection(-1);
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn open_detail_requires_a_selected_item() {
        let mut app = make_app(&[]);
        app.open_detail();
        assert_eq!(app.screen(), Screen::List);

        let mut app = make_app(&["a"]);
        app.open_detail();
        assert_eq!(app.screen(), Screen::Detail);
        app.close_detail();
        assert_eq!(app.screen(), Screen::List);
    }

    #[test]
    fn open_edit_for_selection_starts_session() {
        let mut app = make_app(&["a", "b"]);
        app.move_selection(1);
        app.open_edit_for_selection();
        assert!(app.is_editing());
        let session = app.state().items.edit_item_state.as_ref().expect("session");
        assert_eq!(session.name(), "b");
    }

    #[test]
    fn open_edit_on_empty_deck_is_noop() {
        let mut app = make_app(&[]);
        app.open_edit_for_selection();
        assert!(!app.is_editing());
    }

    #[test]
    fn typed_edits_stay_in_working_copy_until_dismiss() {
        let mut app = make_app(&["a"]);
        app.open_edit_for_selection();
        app.edit_insert_char('b');
        app.edit_insert_char('c');

        let session = app.state().items.edit_item_state.as_ref().expect("session");
        assert_eq!(session.name(), "abc");
        assert_eq!(app.state().items.item_states[0].item.name, "a");

        app.dismiss_edit();
        assert!(!app.is_editing());
        assert_eq!(app.state().items.item_states[0].item.name, "abc");
    }

    #[test]
    fn edit_delete_char_can_empty_the_name() {
        let mut app = make_app(&["a"]);
        app.open_edit_for_selection();
        app.edit_delete_char();
        let session = app.state().items.edit_item_state.as_ref().expect("session");
        assert_eq!(session.name(), "");
        // Deleting past empty stays empty.
        app.edit_delete_char();
        let session = app.state().items.edit_item_state.as_ref().expect("session");
        assert_eq!(session.name(), "");
    }

    #[test]
    fn editor_keys_without_session_are_noops() {
        let mut app = make_app(&["a"]);
        app.edit_insert_char('x');
        app.edit_delete_char();
        assert_eq!(app.state().items.item_states[0].item.name, "a");
    }
}
