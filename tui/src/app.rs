//! Note board state machine.
//!
//! Tracks which view or dialog is on screen, the add-note form, the card
//! selection and the status line. The `App` does not touch the note store;
//! keys that need the store come back as [`AppAction`]s for the session to
//! apply.
//!
//! Dialogs stack: an alert raised while the add-note modal is open returns to
//! the modal when dismissed.

use noteboard_core::dialog::DELETE_PROMPT;
use noteboard_core::NoticeLevel;

use crate::form::{FormEvent, NoteForm};


// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// What the user is looking at.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// The card grid. The add-note modal is closed.
    Board,
    /// The add-note modal is open.
    AddNote,
    /// Blocking yes/no question before a destructive action.
    Confirm {
        prompt: String,
        action: PendingAction,
    },
    /// Blocking notice; any acknowledgement key dismisses it.
    Alert { level: NoticeLevel, message: String },
    /// Key binding overlay.
    Help,
}


impl AppState {
    /// Return a short label for this state, suitable for the status line.
    pub fn label(&self) -> &str {
        match self {
            AppState::Board => "board",
            AppState::AddNote => "add note",
            AppState::Confirm { .. } => "confirm",
            AppState::Alert { .. } => "alert",
            AppState::Help => "help",
        }
    }
}


// ---------------------------------------------------------------------------
// PendingAction
// ---------------------------------------------------------------------------

/// An action that requires user confirmation before executing.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Delete the note at this position.
    DeleteNote { index: usize },
}


// ---------------------------------------------------------------------------
// AppAction
// ---------------------------------------------------------------------------

/// Direction of a selection move in the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}


/// An action produced by the state machine that needs the note store or
/// the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Quit,
    /// Validate and add the form's note.
    SubmitNote,
    /// Close the add-note modal without adding (cancel or dismiss).
    CloseModal,
    /// Ask to delete the selected card.
    RequestDelete,
    MoveSelection(Move),
    /// Accept the pending confirmation.
    Confirm,
    /// Decline the pending confirmation.
    Cancel,
}


// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level UI state for the note board. Does not perform any I/O.
pub struct App {
    /// Current view state.
    pub state: AppState,
    /// States underneath the current one, restored by [`App::back`].
    previous_states: Vec<AppState>,
    /// Transient status message and the time (ms) it was set.
    status_message: Option<(String, u64)>,
    status_ttl_ms: u64,
    /// Fields of the add-note modal.
    pub form: NoteForm,
    /// Index of the selected card.
    pub selected_index: usize,
}


impl App {
    /// Create a new App showing the board with the modal closed.
    pub fn new() -> Self {
        App {
            state: AppState::Board,
            previous_states: Vec::new(),
            status_message: None,
            status_ttl_ms: 4000,
            form: NoteForm::new(),
            selected_index: 0,
        }
    }

    pub fn with_status_ttl(mut self, ttl_ms: u64) -> Self {
        self.status_ttl_ms = ttl_ms;
        self
    }

    // -------------------------------------------------------------------
    // State transitions
    // -------------------------------------------------------------------

    /// Transition to a new state, pushing the current state onto the stack.
    pub fn transition(&mut self, new_state: AppState) {
        let old = std::mem::replace(&mut self.state, new_state);
        self.previous_states.push(old);
    }

    /// Return to the previous state. Returns the state that was left, or
    /// `None` if the stack is empty.
    pub fn back(&mut self) -> Option<AppState> {
        let prev = self.previous_states.pop()?;
        Some(std::mem::replace(&mut self.state, prev))
    }

    /// Whether the add-note modal is open, possibly under an alert.
    pub fn is_modal_open(&self) -> bool {
        self.state == AppState::AddNote || self.previous_states.contains(&AppState::AddNote)
    }

    /// Open the add-note modal with empty fields.
    pub fn open_add_note(&mut self) {
        if self.is_modal_open() {
            return;
        }
        self.form.clear();
        self.transition(AppState::AddNote);
    }

    /// Close the add-note modal and clear its fields.
    pub fn close_modal(&mut self) {
        self.form.clear();
        if self.state == AppState::AddNote {
            self.back();
        }
    }

    /// Show a blocking alert on top of the current state.
    pub fn alert(&mut self, level: NoticeLevel, message: &str) {
        self.transition(AppState::Alert {
            level,
            message: message.to_string(),
        });
    }

    /// Ask for confirmation before deleting the note at `index`.
    pub fn request_delete(&mut self, index: usize) {
        self.transition(AppState::Confirm {
            prompt: DELETE_PROMPT.to_string(),
            action: PendingAction::DeleteNote { index },
        });
    }

    /// Leave the confirm dialog and return its pending action. Returns
    /// `None` when no confirmation is on screen.
    pub fn resolve_confirm(&mut self) -> Option<PendingAction> {
        let action = match &self.state {
            AppState::Confirm { action, .. } => action.clone(),
            _ => return None,
        };
        self.back();
        Some(action)
    }

    // -------------------------------------------------------------------
    // Status messages
    // -------------------------------------------------------------------

    /// Set a transient status message with the given timestamp.
    pub fn set_status(&mut self, msg: &str, now_ms: u64) {
        self.status_message = Some((msg.to_string(), now_ms));
    }

    /// Clear the status message if it has expired relative to `now_ms`.
    pub fn clear_expired_status(&mut self, now_ms: u64) {
        if let Some((_, created)) = &self.status_message {
            if now_ms.saturating_sub(*created) >= self.status_ttl_ms {
                self.status_message = None;
            }
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // -------------------------------------------------------------------
    // Input processing
    // -------------------------------------------------------------------

    /// Process a key event and return an optional action.
    ///
    /// Routing depends on the current state:
    /// - `Alert` and `Help` swallow every key; acknowledgement keys close them.
    /// - `Confirm` handles only 'y', 'n', Enter, and Escape.
    /// - `AddNote` sends keys to the form; Escape dismisses the modal.
    /// - `Board` maps keys to board shortcuts.
    pub fn handle_key(&mut self, key: Key) -> Option<AppAction> {
        match &self.state {
            AppState::Alert { .. } => self.handle_alert_key(key),
            AppState::Help => self.handle_help_key(key),
            AppState::Confirm { .. } => self.handle_confirm_key(key),
            AppState::AddNote => self.handle_form_key(key),
            AppState::Board => self.handle_board_key(key),
        }
    }

    fn handle_alert_key(&mut self, key: Key) -> Option<AppAction> {
        if matches!(key, Key::Enter | Key::Escape | Key::Char(' ')) {
            self.back();
        }
        None
    }

    fn handle_help_key(&mut self, key: Key) -> Option<AppAction> {
        if matches!(
            key,
            Key::Enter | Key::Escape | Key::Char('q') | Key::Char('?')
        ) {
            self.back();
        }
        None
    }

    fn handle_confirm_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Char('y') | Key::Char('Y') | Key::Enter => Some(AppAction::Confirm),
            Key::Char('n') | Key::Char('N') | Key::Escape => Some(AppAction::Cancel),
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: Key) -> Option<AppAction> {
        if key == Key::Escape {
            return Some(AppAction::CloseModal);
        }
        match self.form.handle_key(key)? {
            FormEvent::Submit => Some(AppAction::SubmitNote),
            FormEvent::Cancel => Some(AppAction::CloseModal),
        }
    }

    fn handle_board_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Char('q') => Some(AppAction::Quit),
            Key::Char('?') => {
                self.transition(AppState::Help);
                None
            }
            Key::Char('a') | Key::Char('n') | Key::Char('+') => {
                self.open_add_note();
                None
            }
            Key::Char('d') | Key::Char('x') | Key::Delete => Some(AppAction::RequestDelete),
            Key::Char('h') | Key::Left => Some(AppAction::MoveSelection(Move::Left)),
            Key::Char('l') | Key::Right => Some(AppAction::MoveSelection(Move::Right)),
            Key::Char('k') | Key::Up => Some(AppAction::MoveSelection(Move::Up)),
            Key::Char('j') | Key::Down => Some(AppAction::MoveSelection(Move::Down)),
            Key::Char('g') | Key::Home => Some(AppAction::MoveSelection(Move::First)),
            Key::Char('G') | Key::End => Some(AppAction::MoveSelection(Move::Last)),
            _ => None,
        }
    }

    // -------------------------------------------------------------------
    // Selection helpers
    // -------------------------------------------------------------------

    /// Move the card selection within a grid of `count` cards laid out in
    /// `columns` columns.
    pub fn move_selection(&mut self, mv: Move, count: usize, columns: usize) {
        if count == 0 {
            self.selected_index = 0;
            return;
        }
        let columns = columns.max(1);
        let last = count - 1;
        let sel = self.selected_index.min(last);
        self.selected_index = match mv {
            Move::Left => sel.saturating_sub(1),
            Move::Right => (sel + 1).min(last),
            Move::Up => sel.checked_sub(columns).unwrap_or(sel),
            Move::Down => {
                if sel + columns <= last {
                    sel + columns
                } else if sel / columns < last / columns {
                    // Partial last row: land on its final card.
                    last
                } else {
                    sel
                }
            }
            Move::First => 0,
            Move::Last => last,
        };
    }

    /// Keep the selection inside a list of `count` cards.
    pub fn clamp_selection(&mut self, count: usize) {
        self.selected_index = if count == 0 {
            0
        } else {
            self.selected_index.min(count - 1)
        };
    }
}


impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}


// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A simplified key event for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Ctrl(char),
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use noteboard_core::NoteDraft;

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(Key::Char(ch));
        }
    }

    // --- Construction ---

    #[test]
    fn new_starts_on_board_with_modal_closed() {
        let mut app = App::new();
        assert_eq!(app.state, AppState::Board);
        assert!(!app.is_modal_open());
        assert!(app.back().is_none());
        assert!(app.status_message().is_none());
    }

    #[test]
    fn default_is_new() {
        assert_eq!(App::default().state, AppState::Board);
    }

    // --- Modal state machine ---

    #[test]
    fn add_key_opens_modal() {
        let mut app = App::new();
        assert!(app.handle_key(Key::Char('a')).is_none());
        assert_eq!(app.state, AppState::AddNote);
        assert!(app.is_modal_open());
    }

    #[test]
    fn n_and_plus_also_open_modal() {
        for key in [Key::Char('n'), Key::Char('+')] {
            let mut app = App::new();
            app.handle_key(key);
            assert_eq!(app.state, AppState::AddNote);
        }
    }

    #[test]
    fn escape_in_modal_requests_close() {
        let mut app = App::new();
        app.open_add_note();
        assert_eq!(app.handle_key(Key::Escape), Some(AppAction::CloseModal));
    }

    #[test]
    fn ctrl_s_in_modal_requests_submit() {
        let mut app = App::new();
        app.open_add_note();
        assert_eq!(app.handle_key(Key::Ctrl('s')), Some(AppAction::SubmitNote));
    }

    #[test]
    fn cancel_button_requests_close() {
        let mut app = App::new();
        app.open_add_note();
        app.handle_key(Key::BackTab);
        assert_eq!(app.handle_key(Key::Enter), Some(AppAction::CloseModal));
    }

    #[test]
    fn typing_in_modal_fills_form_not_shortcuts() {
        let mut app = App::new();
        app.open_add_note();
        type_str(&mut app, "qad");
        assert_eq!(app.state, AppState::AddNote);
        assert_eq!(app.form.draft(), NoteDraft::new("qad", ""));
    }

    #[test]
    fn close_modal_clears_form_and_returns_to_board() {
        let mut app = App::new();
        app.open_add_note();
        type_str(&mut app, "draft");
        app.close_modal();
        assert_eq!(app.state, AppState::Board);
        assert!(app.form.is_blank());
        assert!(!app.is_modal_open());
    }

    #[test]
    fn open_add_note_starts_blank() {
        let mut app = App::new();
        app.form.title.insert_str("stale");
        app.open_add_note();
        assert!(app.form.is_blank());
    }

    #[test]
    fn alert_over_modal_returns_to_modal() {
        let mut app = App::new();
        app.open_add_note();
        app.alert(NoticeLevel::Error, "Please fill out all fields");
        assert!(app.is_modal_open());
        assert!(matches!(app.state, AppState::Alert { .. }));

        app.handle_key(Key::Enter);
        assert_eq!(app.state, AppState::AddNote);
    }

    #[test]
    fn alert_swallows_shortcuts() {
        let mut app = App::new();
        app.alert(NoticeLevel::Success, "done");
        assert!(app.handle_key(Key::Char('q')).is_none());
        assert!(matches!(app.state, AppState::Alert { .. }));
        app.handle_key(Key::Char(' '));
        assert_eq!(app.state, AppState::Board);
    }

    // --- Confirm ---

    #[test]
    fn request_delete_enters_confirm() {
        let mut app = App::new();
        app.request_delete(2);
        match &app.state {
            AppState::Confirm { prompt, action } => {
                assert_eq!(prompt, DELETE_PROMPT);
                assert_eq!(action, &PendingAction::DeleteNote { index: 2 });
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn confirm_keys() {
        let mut app = App::new();
        app.request_delete(0);
        assert_eq!(app.handle_key(Key::Char('y')), Some(AppAction::Confirm));
        assert_eq!(app.handle_key(Key::Enter), Some(AppAction::Confirm));
        assert_eq!(app.handle_key(Key::Char('n')), Some(AppAction::Cancel));
        assert_eq!(app.handle_key(Key::Escape), Some(AppAction::Cancel));
        assert!(app.handle_key(Key::Char('x')).is_none());
    }

    #[test]
    fn resolve_confirm_pops_and_returns_action() {
        let mut app = App::new();
        app.request_delete(1);
        assert_eq!(
            app.resolve_confirm(),
            Some(PendingAction::DeleteNote { index: 1 })
        );
        assert_eq!(app.state, AppState::Board);
        assert!(app.resolve_confirm().is_none());
    }

    // --- Board keys ---

    #[test]
    fn board_shortcuts() {
        let mut app = App::new();
        assert_eq!(app.handle_key(Key::Char('q')), Some(AppAction::Quit));
        assert_eq!(app.handle_key(Key::Char('d')), Some(AppAction::RequestDelete));
        assert_eq!(app.handle_key(Key::Delete), Some(AppAction::RequestDelete));
        assert_eq!(
            app.handle_key(Key::Char('j')),
            Some(AppAction::MoveSelection(Move::Down))
        );
        assert_eq!(
            app.handle_key(Key::Left),
            Some(AppAction::MoveSelection(Move::Left))
        );
        assert!(app.handle_key(Key::Tab).is_none());
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = App::new();
        app.handle_key(Key::Char('?'));
        assert_eq!(app.state, AppState::Help);
        app.handle_key(Key::Escape);
        assert_eq!(app.state, AppState::Board);
    }

    // --- Navigation stack ---

    #[test]
    fn back_on_empty_stack_is_none() {
        let mut app = App::new();
        assert!(app.back().is_none());
        assert_eq!(app.state, AppState::Board);
    }

    #[test]
    fn dismissing_alert_over_closed_modal_returns_to_board() {
        let mut app = App::new();
        app.open_add_note();
        app.close_modal();
        app.alert(NoticeLevel::Info, "x");
        assert!(!app.is_modal_open());
        app.handle_key(Key::Escape);
        assert_eq!(app.state, AppState::Board);
        assert!(app.back().is_none());
    }

    // --- Selection ---

    #[test]
    fn move_selection_in_grid() {
        let mut app = App::new();
        // 7 cards in 3 columns: rows [0 1 2] [3 4 5] [6]
        app.move_selection(Move::Right, 7, 3);
        assert_eq!(app.selected_index, 1);
        app.move_selection(Move::Down, 7, 3);
        assert_eq!(app.selected_index, 4);
        app.move_selection(Move::Down, 7, 3);
        assert_eq!(app.selected_index, 6);
        app.move_selection(Move::Down, 7, 3);
        assert_eq!(app.selected_index, 6);
        app.move_selection(Move::Up, 7, 3);
        assert_eq!(app.selected_index, 3);
        app.move_selection(Move::Up, 7, 3);
        assert_eq!(app.selected_index, 0);
        app.move_selection(Move::Up, 7, 3);
        assert_eq!(app.selected_index, 0);
        app.move_selection(Move::Left, 7, 3);
        assert_eq!(app.selected_index, 0);
        app.move_selection(Move::Last, 7, 3);
        assert_eq!(app.selected_index, 6);
        app.move_selection(Move::Right, 7, 3);
        assert_eq!(app.selected_index, 6);
        app.move_selection(Move::First, 7, 3);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn move_selection_empty_list_stays_zero() {
        let mut app = App::new();
        app.selected_index = 4;
        app.move_selection(Move::Down, 0, 2);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn clamp_selection_after_shrink() {
        let mut app = App::new();
        app.selected_index = 5;
        app.clamp_selection(3);
        assert_eq!(app.selected_index, 2);
        app.clamp_selection(0);
        assert_eq!(app.selected_index, 0);
    }

    // --- Status messages ---

    #[test]
    fn status_message_expires() {
        let mut app = App::new().with_status_ttl(1000);
        app.set_status("saved", 100);
        app.clear_expired_status(500);
        assert_eq!(app.status_message(), Some("saved"));
        app.clear_expired_status(1100);
        assert!(app.status_message().is_none());
    }

    #[test]
    fn clear_status_removes_immediately() {
        let mut app = App::new();
        app.set_status("msg", 0);
        app.clear_status();
        assert!(app.status_message().is_none());
    }

    #[test]
    fn state_labels() {
        assert_eq!(AppState::Board.label(), "board");
        assert_eq!(AppState::AddNote.label(), "add note");
        assert_eq!(AppState::Help.label(), "help");
        assert_eq!(
            AppState::Alert { level: NoticeLevel::Info, message: "m".into() }.label(),
            "alert"
        );
    }
}
