pub mod app;
pub mod edit;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod item;
pub mod items;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod root;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
