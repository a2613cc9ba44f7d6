use crate::ui::items::ItemsState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 5;

/// Render the modal editor.
///
/// Visible exactly while an edit session exists; the text field binds the
/// session's working-copy name.
pub fn render_edit_dialog(frame: &mut Frame, state: &ItemsState) {
    let Some(session) = state.edit_item_state.as_ref() else {
        return;
    };

    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    let field_style = Style::default().fg(HEADER_TEXT);
    let cursor_style = Style::default().fg(ACCENT).add_modifier(Modifier::SLOW_BLINK);
    let hint_style = Style::default().fg(HEADER_SEPARATOR);

    let lines = vec![
        Line::from(vec![
            Span::styled(" Name: ", hint_style),
            Span::styled(session.name().to_string(), field_style),
            Span::styled("▏", cursor_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Enter/Esc saves and closes", hint_style)),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Edit Item ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
