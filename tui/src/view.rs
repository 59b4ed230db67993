//! Full-screen layout: header bar, card grid, status line, and whichever
//! dialog the session has open on top.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use noteboard_core::KeyValueStore;

use crate::app::AppState;
use crate::dialogs;
use crate::grid;
use crate::session::Session;
use crate::theme::Theme;

const APP_TITLE: &str = "NoteBoard";
const ADD_HINT: &str = "[a] Add Note";


/// Render one frame of the note board.
pub fn render_frame<S: KeyValueStore>(frame: &mut Frame, session: &Session<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // card grid
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    let theme = session.theme();
    let app = &session.app;

    render_header(frame, chunks[0], theme);
    grid::render_board(
        frame,
        chunks[1],
        session.store().notes(),
        app.selected_index,
        theme,
    );
    render_status_line(frame, chunks[2], session);

    let area = frame.area();
    match &app.state {
        AppState::Board => {}
        AppState::AddNote => dialogs::render_form(frame, area, &app.form, theme),
        AppState::Confirm { prompt, .. } => dialogs::render_confirm(frame, area, prompt, theme),
        AppState::Alert { level, message } => {
            if app.is_modal_open() {
                dialogs::render_form(frame, area, &app.form, theme);
            }
            dialogs::render_alert(frame, area, *level, message, theme);
        }
        AppState::Help => dialogs::render_help(frame, area, theme),
    }
}


fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default()
        .bg(theme.header_bg.to_term())
        .fg(theme.header_fg.to_term());
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ADD_HINT.len() as u16 + 1),
        ])
        .split(area);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", APP_TITLE), style.bold())).style(style),
        parts[0],
    );
    frame.render_widget(Paragraph::new(ADD_HINT).style(style), parts[1]);
}


fn render_status_line<S: KeyValueStore>(frame: &mut Frame, area: Rect, session: &Session<S>) {
    let store = session.store();
    let theme = session.theme();
    let count = match store.len() {
        1 => "1 note".to_string(),
        n => format!("{} notes", n),
    };

    let mut spans = vec![Span::raw(format!(" {} | ", count))];
    match session.app.status_message() {
        Some(msg) => spans.push(Span::styled(
            msg.to_string(),
            Style::default().fg(theme.error.to_term()),
        )),
        None => spans.push(Span::raw(format!(
            "{} | ? for help",
            session.app.state.label()
        ))),
    }
    if !store.is_synced() {
        spans.push(Span::styled(
            " [unsaved]",
            Style::default().fg(theme.error.to_term()).bold(),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(theme.placeholder.to_term())),
        area,
    );
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Key;
    use noteboard_core::{MemoryStore, NoteStore};
    use ratatui::backend::TestBackend;

    fn session_with(notes: &[(&str, &str)]) -> Session<MemoryStore> {
        let mut s = Session::new(NoteStore::load(MemoryStore::new()), Theme::default());
        for (title, text) in notes {
            s.handle_key(Key::Char('a'), 0);
            for ch in title.chars() {
                s.handle_key(Key::Char(ch), 0);
            }
            s.handle_key(Key::Tab, 0);
            for ch in text.chars() {
                s.handle_key(Key::Char(ch), 0);
            }
            s.handle_key(Key::Ctrl('s'), 0);
            s.handle_key(Key::Enter, 0);
        }
        s
    }

    fn screen(session: &Session<MemoryStore>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_frame(f, session)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn header_and_empty_board() {
        let s = session_with(&[]);
        let out = screen(&s, 80, 20);
        let header = out.lines().next().unwrap();
        assert!(header.contains(APP_TITLE));
        assert!(header.contains(ADD_HINT));
        assert!(out.contains(grid::EMPTY_PLACEHOLDER));
        assert!(out.contains("0 notes"));
    }

    #[test]
    fn cards_and_count_after_adding() {
        let s = session_with(&[("Groceries", "milk")]);
        let out = screen(&s, 80, 20);
        assert!(out.contains("Groceries"));
        assert!(out.contains("milk"));
        assert!(out.contains("1 note |"));
        assert!(!out.contains("[unsaved]"));
    }

    #[test]
    fn add_modal_overlays_board() {
        let mut s = session_with(&[]);
        s.handle_key(Key::Char('a'), 0);
        let out = screen(&s, 80, 24);
        assert!(out.contains("Note Title"));
        assert!(out.contains("[ Add Note ]"));
        assert!(out.contains("add note"));
    }

    #[test]
    fn validation_alert_drawn_over_open_form() {
        let mut s = session_with(&[]);
        s.handle_key(Key::Char('a'), 0);
        s.handle_key(Key::Ctrl('s'), 0);
        let out = screen(&s, 80, 24);
        assert!(out.contains("Please fill out all fields"));
        assert!(out.contains("[ Cancel ]"));
    }

    #[test]
    fn confirm_dialog_shows_prompt() {
        let mut s = session_with(&[("A", "x")]);
        s.handle_key(Key::Char('d'), 0);
        let out = screen(&s, 80, 24);
        assert!(out.contains("Are you sure you want to delete this note?"));
    }

    #[test]
    fn status_message_replaces_hint() {
        let mut s = session_with(&[]);
        s.handle_key(Key::Char('d'), 0);
        let out = screen(&s, 80, 20);
        assert!(out.contains("No note to delete"));
        assert!(!out.contains("? for help"));
    }
}
