//! Modal overlays: the add-note form, the delete confirmation, alerts and
//! the help panel. Each is drawn centered over the board after clearing the
//! area beneath it.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use noteboard_core::NoticeLevel;

use crate::form::{FormFocus, NoteForm};
use crate::theme::Theme;

const FORM_WIDTH: u16 = 56;
const FORM_TEXT_LINES: u16 = 5;

const HELP_TEXT: &str = concat!(
    "  a  n  +      Add a note\n",
    "  arrows hjkl  Move between cards\n",
    "  g  G         First / last card\n",
    "  d  x  Del    Delete the selected card\n",
    "  ?            Show this help\n",
    "  q            Quit\n",
    "  Ctrl-C       Force quit\n",
    "\n",
    "  In the form:\n",
    "  Tab S-Tab    Next / previous field\n",
    "  Enter        Next field, newline in text, press button\n",
    "  Ctrl-S       Add the note\n",
    "  Esc          Close without adding\n",
);


/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}


fn dialog_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(format!(" {} ", title), Style::default().fg(color).bold()))
}


/// Draw the add-note modal and place the terminal cursor in the focused
/// field.
pub fn render_form(frame: &mut Frame, area: Rect, form: &NoteForm, theme: &Theme) {
    // title field, text field, button row, outer border
    let height = 3 + (FORM_TEXT_LINES + 2) + 1 + 2;
    let popup = centered_rect(FORM_WIDTH, height, area);
    frame.render_widget(Clear, popup);

    let block = dialog_block("Add Note", theme.focus.to_term());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(FORM_TEXT_LINES + 2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        });

    let focus = form.focus();
    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(theme.focus.to_term())
        } else {
            Style::default().fg(theme.card_border.to_term())
        }
    };

    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_style(focus == FormFocus::Title))
        .title("Title");
    let title_inner = title_block.inner(rows[0]);
    let title = if form.title.is_empty() {
        Paragraph::new(Span::styled("Note Title", Style::default().fg(theme.placeholder.to_term())))
    } else {
        Paragraph::new(form.title.text())
    };
    frame.render_widget(title.block(title_block), rows[0]);

    let text_block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_style(focus == FormFocus::Text))
        .title("Text");
    let text_inner = text_block.inner(rows[1]);
    let (line, col) = form.text.cursor_line_col();
    let scroll = (line as u16).saturating_sub(text_inner.height.saturating_sub(1));
    let text = if form.text.is_empty() {
        Paragraph::new(Span::styled("Note Text", Style::default().fg(theme.placeholder.to_term())))
    } else {
        Paragraph::new(form.text.text()).scroll((scroll, 0))
    };
    frame.render_widget(text.block(text_block), rows[1]);

    let button = |label: &'static str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(theme.header_fg.to_term())
                .bg(theme.focus.to_term())
                .bold()
        } else {
            Style::default().fg(theme.card_title.to_term())
        };
        Span::styled(label, style)
    };
    let buttons = Line::from(vec![
        button("[ Add Note ]", focus == FormFocus::Submit),
        Span::raw("  "),
        button("[ Cancel ]", focus == FormFocus::Cancel),
    ]);
    frame.render_widget(Paragraph::new(buttons), rows[2]);

    match focus {
        FormFocus::Title => {
            let x = title_inner.x + (form.title.cursor_pos() as u16).min(title_inner.width.saturating_sub(1));
            frame.set_cursor_position((x, title_inner.y));
        }
        FormFocus::Text => {
            let x = text_inner.x + (col as u16).min(text_inner.width.saturating_sub(1));
            let y = text_inner.y + (line as u16 - scroll).min(text_inner.height.saturating_sub(1));
            frame.set_cursor_position((x, y));
        }
        FormFocus::Submit | FormFocus::Cancel => {}
    }
}


/// Draw a yes/no confirmation.
pub fn render_confirm(frame: &mut Frame, area: Rect, prompt: &str, theme: &Theme) {
    let popup = centered_rect(52, 7, area);
    frame.render_widget(Clear, popup);
    let text = vec![
        Line::raw(""),
        Line::raw(prompt.to_string()),
        Line::raw(""),
        Line::styled("[y] Yes   [n] No", Style::default().fg(theme.card_title.to_term())),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog_block("Confirm", theme.error.to_term()));
    frame.render_widget(paragraph, popup);
}


/// Draw a blocking notice.
pub fn render_alert(frame: &mut Frame, area: Rect, level: NoticeLevel, message: &str, theme: &Theme) {
    let color = match level {
        NoticeLevel::Error => theme.error,
        NoticeLevel::Success => theme.success,
        NoticeLevel::Info => theme.info,
    };
    let popup = centered_rect(48, 7, area);
    frame.render_widget(Clear, popup);
    let text = vec![
        Line::raw(""),
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled("[Enter] OK", Style::default().fg(theme.card_title.to_term())),
    ];
    let title = match level {
        NoticeLevel::Error => "Error",
        NoticeLevel::Success => "Done",
        NoticeLevel::Info => "Notice",
    };
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog_block(title, color.to_term()));
    frame.render_widget(paragraph, popup);
}


/// Draw the key binding overlay.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let height = HELP_TEXT.lines().count() as u16 + 2;
    let popup = centered_rect(64, height, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(HELP_TEXT)
        .block(dialog_block("Help", theme.info.to_term()))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}
