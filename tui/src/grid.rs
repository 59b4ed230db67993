//! Card grid: renders the note list as a responsive grid of cards.
//!
//! The column count follows the terminal width (one column on narrow
//! terminals, two on medium, three on wide ones). Rows that do not fit are
//! scrolled so the selected card stays visible.

use ratatui::prelude::*;
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use noteboard_core::Note;

use crate::theme::Theme;

/// Height of one card row, borders included.
pub const CARD_HEIGHT: u16 = 6;

/// Text shown in place of the grid when there are no notes.
pub const EMPTY_PLACEHOLDER: &str = "No notes yet";

const MEDIUM_WIDTH: u16 = 60;
const WIDE_WIDTH: u16 = 100;


/// Number of card columns for a terminal of `width` columns.
pub fn columns_for_width(width: u16) -> usize {
    if width < MEDIUM_WIDTH {
        1
    } else if width < WIDE_WIDTH {
        2
    } else {
        3
    }
}


/// Number of card rows that fit in `height` lines (at least one).
pub fn visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}


/// First grid row to draw so that `selected_row` is on screen.
pub fn first_visible_row(selected_row: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if selected_row < visible {
        0
    } else {
        selected_row + 1 - visible
    }
}


/// Render the board: the card grid, or the placeholder when empty.
pub fn render_board(frame: &mut Frame, area: Rect, notes: &[Note], selected: usize, theme: &Theme) {
    if notes.is_empty() {
        render_placeholder(frame, area, theme);
        return;
    }

    let columns = columns_for_width(area.width);
    let total_rows = notes.len().div_ceil(columns);
    let visible = visible_rows(area.height).min(total_rows);
    let first_row = first_visible_row(selected / columns, visible);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat(Constraint::Length(CARD_HEIGHT))
                .take(visible)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (slot, row) in (first_row..first_row + visible).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[slot]);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            if let Some(note) = notes.get(index) {
                render_card(frame, *cell, note, index == selected, theme);
            }
        }
    }
}


/// Render one note card with its delete control.
fn render_card(frame: &mut Frame, area: Rect, note: &Note, selected: bool, theme: &Theme) {
    let border_color = if selected {
        theme.card_selected
    } else {
        theme.card_border
    };
    let control_style = if selected {
        Style::default().fg(theme.error.to_term()).bold()
    } else {
        Style::default().fg(theme.card_border.to_term())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color.to_term()))
        .title(Span::styled(
            format!(" {} ", note.title()),
            Style::default().fg(theme.card_title.to_term()).bold(),
        ))
        .title(
            Title::from(Span::styled(if selected { "[x]" } else { " x " }, control_style))
                .alignment(Alignment::Right),
        );

    let body = Paragraph::new(note.text())
        .style(Style::default().fg(theme.card_text.to_term()))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(body, area);
}


/// Centered "no notes" placeholder with a hint.
fn render_placeholder(frame: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default().fg(theme.placeholder.to_term());
    let lines = vec![
        Line::from(Span::styled(EMPTY_PLACEHOLDER, style.bold())),
        Line::from(Span::styled("Press a to add a note", style)),
    ];
    let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: (lines.len() as u16).min(area.height),
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
