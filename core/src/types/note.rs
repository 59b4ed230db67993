//! Note records and the draft values they are validated from.
//!
//! A `Note` can only be built through [`Note::new`] or by validating a
//! [`NoteDraft`], so every note held by the store has a non-empty title and
//! a non-empty text. Whitespace counts as content.

use serde::{Deserialize, Serialize};
use thiserror::Error;


// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Why a draft could not become a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("note title is empty")]
    EmptyTitle,
    #[error("note text is empty")]
    EmptyText,
    #[error("note title and text are empty")]
    EmptyTitleAndText,
}


// ---------------------------------------------------------------------------
// Note
// ---------------------------------------------------------------------------

/// A single title/text note. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    text: String,
}


impl Note {
    /// Build a note, rejecting an empty title or text.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let text = text.into();
        match (title.is_empty(), text.is_empty()) {
            (true, true) => Err(ValidationError::EmptyTitleAndText),
            (true, false) => Err(ValidationError::EmptyTitle),
            (false, true) => Err(ValidationError::EmptyText),
            (false, false) => Ok(Note { title, text }),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this note still satisfies the non-empty invariant.
    ///
    /// Deserialization bypasses [`Note::new`], so loaded lists are checked
    /// with this before they are trusted.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.text.is_empty()
    }
}


// ---------------------------------------------------------------------------
// NoteDraft
// ---------------------------------------------------------------------------

/// Raw form values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub text: String,
}


impl NoteDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        NoteDraft {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Validate the draft into a note.
    pub fn validate(self) -> Result<Note, ValidationError> {
        Note::new(self.title, self.text)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
