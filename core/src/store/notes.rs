//! The note list and its mirror in a durable key-value store.
//!
//! `NoteStore` owns the in-memory list. Every successful mutation serializes
//! the whole list to JSON and overwrites the single stored value; there are
//! no partial writes. Loading never fails: a missing, unreadable or
//! malformed value is treated as "no notes yet".

use log::{debug, info, warn};
use thiserror::Error;

use crate::dialog::{Confirm, DELETE_PROMPT};
use crate::store::kv::KeyValueStore;
use crate::types::note::{Note, NoteDraft, ValidationError};

/// Key the note list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";


/// Failure of a note operation. The list is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("note index {index} out of range for {len} notes")]
    IndexOutOfRange { index: usize, len: usize },
}


/// Whether the write that followed a mutation reached the durable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    Saved,
    /// The in-memory list changed but the write failed. The message is
    /// suitable for a status line.
    Failed(String),
}


impl Persisted {
    pub fn is_saved(&self) -> bool {
        matches!(self, Persisted::Saved)
    }
}


/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing changed.
    Declined,
    /// The note was removed from the list.
    Deleted { note: Note, persisted: Persisted },
}


/// In-memory note list backed by a [`KeyValueStore`].
pub struct NoteStore<S: KeyValueStore> {
    backend: S,
    key: String,
    notes: Vec<Note>,
    synced: bool,
}


impl<S: KeyValueStore> NoteStore<S> {
    /// Hydrate a store from `backend` under the default key.
    pub fn load(backend: S) -> Self {
        Self::load_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Hydrate a store from `backend` under `key`.
    pub fn load_with_key(backend: S, key: &str) -> Self {
        let notes = read_notes(&backend, key);
        info!(
            "event=notes_loaded module=store key={} count={}",
            key,
            notes.len()
        );
        NoteStore {
            backend,
            key: key.to_string(),
            notes,
            synced: true,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// False when the last write to the backend failed.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// Validate `draft`, append it, and persist the full list.
    pub fn add(&mut self, draft: NoteDraft) -> Result<(&Note, Persisted), NoteError> {
        let note = draft.validate()?;
        self.notes.push(note);
        let persisted = self.persist();
        let index = self.notes.len() - 1;
        info!(
            "event=note_added module=store index={} count={}",
            index,
            self.notes.len()
        );
        Ok((&self.notes[index], persisted))
    }

    /// Ask `confirm` and, if accepted, remove the note at `index` and
    /// persist the full list.
    ///
    /// An out-of-range index is rejected before the user is asked.
    pub fn delete_at(
        &mut self,
        index: usize,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, NoteError> {
        if index >= self.notes.len() {
            return Err(NoteError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("event=note_delete_declined module=store index={}", index);
            return Ok(DeleteOutcome::Declined);
        }
        let note = self.notes.remove(index);
        let persisted = self.persist();
        info!(
            "event=note_deleted module=store index={} count={}",
            index,
            self.notes.len()
        );
        Ok(DeleteOutcome::Deleted { note, persisted })
    }

    /// Re-read the list from the backend, replacing the in-memory copy.
    pub fn reload(&mut self) {
        self.notes = read_notes(&self.backend, &self.key);
        self.synced = true;
    }

    /// Serialize the whole list and overwrite the stored value.
    fn persist(&mut self) -> Persisted {
        let result = serde_json::to_string(&self.notes)
            .map_err(|e| format!("failed to serialize notes: {}", e))
            .and_then(|json| {
                self.backend
                    .set(&self.key, &json)
                    .map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => {
                self.synced = true;
                Persisted::Saved
            }
            Err(message) => {
                warn!(
                    "event=notes_persist module=store status=error key={} error={}",
                    self.key, message
                );
                self.synced = false;
                Persisted::Failed(message)
            }
        }
    }
}


fn read_notes<S: KeyValueStore>(backend: &S, key: &str) -> Vec<Note> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(
                "event=notes_load module=store status=degraded key={} error={}",
                key, e
            );
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(notes) => {
            let invalid = notes.iter().filter(|n| !n.is_valid()).count();
            if invalid > 0 {
                warn!(
                    "event=notes_load module=store status=ok key={} invalid_entries={}",
                    key, invalid
                );
            }
            notes
        }
        Err(e) => {
            warn!(
                "event=notes_load module=store status=degraded key={} error={}",
                key, e
            );
            Vec::new()
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
