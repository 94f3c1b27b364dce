//! Rendering for bookdex: search input, result-count stepper, the books
//! list with its empty-state messages, busy indicator, and footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Position,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, EmptyNotice};

/// Startup message in the empty results region.
const HINT_MESSAGE: &str = "Search the Google Books catalog by title";
/// Shown after a search that produced nothing to display.
const NO_RESULTS_MESSAGE: &str = "No books found";
/// Shown when the submit-time connectivity check failed.
const NO_CONNECTION_MESSAGE: &str = "No internet connection";
/// Busy indicator text while a fetch is in flight.
const LOADING_MESSAGE: &str = "Searching the catalog...";

/// Render one frame of the application.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Search input with a visible caret at the end of the text
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, chunks[0]);
    let caret_x = chunks[0]
        .x
        .saturating_add(1)
        .saturating_add(app.input.width() as u16)
        .min(chunks[0].right().saturating_sub(2));
    f.set_cursor_position(Position::new(caret_x, chunks[0].y.saturating_add(1)));

    // Result-count stepper display
    let stepper = Line::from(vec![
        Span::raw(" Max results: "),
        Span::styled(
            format!("{:>2}", app.max_results),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   Ctrl+a raise / Ctrl+x lower",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(stepper), chunks[1]);

    render_books(f, app, chunks[2]);

    // Footer: transient toast takes priority over the keybind hints
    let footer = app.toast_message.as_ref().map_or_else(
        || {
            Line::from(Span::styled(
                " Enter search   Up/Down move   Ctrl+l clear   Esc quit",
                Style::default().fg(Color::DarkGray),
            ))
        },
        |toast| {
            Line::from(Span::styled(
                format!(" {toast}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        },
    );
    f.render_widget(Paragraph::new(footer), chunks[3]);
}

/// Render the results region: busy indicator, empty-state message, or the
/// two-line-per-book list with the selection kept centered when possible.
fn render_books(f: &mut Frame, app: &mut AppState, area: ratatui::prelude::Rect) {
    let block = Block::default()
        .title(format!(" Books ({}) ", app.books.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.loading {
        let busy = Paragraph::new(LOADING_MESSAGE)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(busy, area);
        return;
    }

    if app.books.is_empty() {
        let message = match app.empty_notice {
            EmptyNotice::Hint => HINT_MESSAGE,
            EmptyNotice::Cleared => "",
            EmptyNotice::NoResults => NO_RESULTS_MESSAGE,
            EmptyNotice::NoConnection => NO_CONNECTION_MESSAGE,
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Each book occupies two rows; keep the selection centered when the list
    // overflows the viewport
    {
        let viewport_rows = (area.height.saturating_sub(2) / 2) as usize;
        let len = app.books.len();
        let selected = app.selected.min(len - 1);
        if viewport_rows > 0 && len > viewport_rows {
            let max_offset = len.saturating_sub(viewport_rows);
            let desired = selected.saturating_sub(viewport_rows / 2).min(max_offset);
            if app.list_state.offset() != desired {
                let mut st = ratatui::widgets::ListState::default().with_offset(desired);
                st.select(Some(selected));
                app.list_state = st;
            } else {
                app.list_state.select(Some(selected));
            }
        } else {
            app.list_state.select(Some(selected));
        }
    }

    let items: Vec<ListItem> = app
        .books
        .iter()
        .map(|b| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    b.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", b.author),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}
