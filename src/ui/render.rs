use crate::ui::app::{App, Screen};
use crate::ui::edit::render_edit_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(&app.state().items), header);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::List => render_list(frame, app, body),
        Screen::Detail => render_detail(frame, app, body),
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);

    // Modal editor sits on top of whichever screen is open.
    render_edit_dialog(frame, &app.state().items);
}

fn render_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = &app.state().items.item_states;
    let text_style = Style::default().fg(HEADER_TEXT);
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = if items.is_empty() {
        vec![Line::from(Span::styled(
            " No items. Seed some via the config file or --name.",
            Style::default().fg(HEADER_SEPARATOR),
        ))]
    } else {
        items
            .iter()
            .enumerate()
            .map(|(index, state)| {
                let selected = index == app.selection();
                let marker = if selected { " ▸ " } else { "   " };
                let row_style = if selected {
                    text_style.bg(ACTIVE_HIGHLIGHT)
                } else {
                    text_style
                };
                let name = state.item.name.clone();
                let padding = inner_width
                    .saturating_sub(marker.chars().count())
                    .saturating_sub(name.chars().count());
                Line::from(vec![
                    Span::styled(marker.to_string(), Style::default().fg(ACCENT)),
                    Span::styled(name, row_style),
                    Span::styled(" ".repeat(padding), row_style),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Items ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn render_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let label_style = Style::default().fg(HEADER_SEPARATOR);

    let lines = match app.selected_item_state() {
        Some(state) => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Name: ", label_style),
                Span::styled(state.item.name.clone(), text_style),
            ]),
            Line::from(vec![
                Span::styled("  Id:   ", label_style),
                Span::styled(state.id().to_string(), text_style),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            " Item no longer exists.",
            label_style,
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Item Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
