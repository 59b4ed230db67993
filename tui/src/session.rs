//! View root: owns the note store and the UI state machine.
//!
//! `Session` turns keys into [`AppAction`]s through [`App`] and applies the
//! ones that need the store via the flows in `noteboard_core::board`. It
//! has no terminal, so whole add/delete workflows can be driven from tests.

use log::warn;

use noteboard_core::{
    delete_note, submit_note, DeleteOutcome, DialogAnswer, KeyValueStore, NoteStore, NoticeQueue,
    Persisted,
};

use crate::app::{App, AppAction, Key, PendingAction};
use crate::grid;
use crate::theme::Theme;


/// The note board's explicit state container.
pub struct Session<S: KeyValueStore> {
    pub app: App,
    store: NoteStore<S>,
    theme: Theme,
    grid_columns: usize,
}


impl<S: KeyValueStore> Session<S> {
    pub fn new(store: NoteStore<S>, theme: Theme) -> Self {
        Session {
            app: App::new(),
            store,
            theme,
            grid_columns: 1,
        }
    }

    /// Set how long status line messages stay visible.
    pub fn with_status_ttl(mut self, ttl_ms: u64) -> Self {
        self.app = self.app.with_status_ttl(ttl_ms);
        self
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Record the board width so grid navigation matches what is drawn.
    pub fn set_board_width(&mut self, width: u16) {
        self.grid_columns = grid::columns_for_width(width);
    }

    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    /// Feed one key through the state machine. Returns true to quit.
    pub fn handle_key(&mut self, key: Key, now_ms: u64) -> bool {
        match self.app.handle_key(key) {
            Some(action) => self.handle_action(action, now_ms),
            None => false,
        }
    }

    /// Apply an action. Returns true if the application should quit.
    pub fn handle_action(&mut self, action: AppAction, now_ms: u64) -> bool {
        match action {
            AppAction::Quit => return true,
            AppAction::SubmitNote => self.submit(now_ms),
            AppAction::CloseModal => self.app.close_modal(),
            AppAction::RequestDelete => {
                if self.store.is_empty() {
                    self.app.set_status("No note to delete", now_ms);
                } else {
                    self.app.clamp_selection(self.store.len());
                    self.app.request_delete(self.app.selected_index);
                }
            }
            AppAction::MoveSelection(mv) => {
                self.app
                    .move_selection(mv, self.store.len(), self.grid_columns);
            }
            AppAction::Confirm => self.resolve_confirm(true, now_ms),
            AppAction::Cancel => self.resolve_confirm(false, now_ms),
        }
        false
    }

    /// Expire stale status messages.
    pub fn tick(&mut self, now_ms: u64) {
        self.app.clear_expired_status(now_ms);
    }

    fn submit(&mut self, now_ms: u64) {
        let draft = self.app.form.draft();
        let mut notices = NoticeQueue::new();
        if let Ok(persisted) = submit_note(&mut self.store, draft, &mut notices) {
            self.app.close_modal();
            self.app.selected_index = self.store.len() - 1;
            self.report(&persisted, now_ms);
        }
        for (level, message) in notices.drain() {
            self.app.alert(level, &message);
        }
    }

    fn resolve_confirm(&mut self, accepted: bool, now_ms: u64) {
        let Some(PendingAction::DeleteNote { index }) = self.app.resolve_confirm() else {
            return;
        };
        let mut answer = DialogAnswer::from_bool(accepted);
        match delete_note(&mut self.store, index, &mut answer) {
            Ok(DeleteOutcome::Deleted { persisted, .. }) => {
                self.app.clamp_selection(self.store.len());
                self.report(&persisted, now_ms);
            }
            Ok(DeleteOutcome::Declined) => {}
            Err(e) => {
                warn!("event=delete_failed module=session error={}", e);
                self.app.set_status(&e.to_string(), now_ms);
            }
        }
    }

    fn report(&mut self, persisted: &Persisted, now_ms: u64) {
        if let Persisted::Failed(message) = persisted {
            self.app
                .set_status(&format!("Could not save notes: {}", message), now_ms);
        }
    }
}
