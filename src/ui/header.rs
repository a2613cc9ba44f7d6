use crate::ui::items::ItemsState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, items: &ItemsState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(ACCENT);

        let count = items.item_states.len();
        let mode = if items.is_editing() { "editing" } else { "browsing" };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("itemdeck", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} items", count), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
