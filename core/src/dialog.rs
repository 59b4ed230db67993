//! Confirmation and notification interfaces.
//!
//! The note flows ask yes/no questions and report outcomes through these
//! traits instead of calling into a UI toolkit. A terminal UI answers them
//! with modal states; tests answer them with canned values.

/// Prompt shown before a note is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

/// Alert shown when a submitted form has an empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields";

/// Alert shown after a note has been added.
pub const NOTE_ADDED_MESSAGE: &str = "Note added successfully";


/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}


impl NoticeLevel {
    /// Short label for titles and logs.
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        }
    }
}


/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}


/// Tells the user something happened.
pub trait Notify {
    fn notify(&mut self, level: NoticeLevel, message: &str);
}


/// An answer that was already collected, e.g. by a non-blocking confirm
/// dialog that resolved before the flow runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    Accepted,
    Declined,
}


impl DialogAnswer {
    pub fn from_bool(accepted: bool) -> Self {
        if accepted {
            DialogAnswer::Accepted
        } else {
            DialogAnswer::Declined
        }
    }
}


impl Confirm for DialogAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self == DialogAnswer::Accepted
    }
}


/// Collects notices in order so the caller can present them after its own
/// state transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    notices: Vec<(NoticeLevel, String)>,
}


impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Take all queued notices, oldest first.
    pub fn drain(&mut self) -> Vec<(NoticeLevel, String)> {
        std::mem::take(&mut self.notices)
    }
}


impl Notify for NoticeQueue {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.notices.push((level, message.to_string()));
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_answer_confirms() {
        assert!(DialogAnswer::Accepted.confirm(DELETE_PROMPT));
        assert!(!DialogAnswer::Declined.confirm(DELETE_PROMPT));
    }

    #[test]
    fn dialog_answer_from_bool() {
        assert_eq!(DialogAnswer::from_bool(true), DialogAnswer::Accepted);
        assert_eq!(DialogAnswer::from_bool(false), DialogAnswer::Declined);
    }

    #[test]
    fn notice_queue_keeps_order_and_drains() {
        let mut queue = NoticeQueue::new();
        queue.notify(NoticeLevel::Error, "first");
        queue.notify(NoticeLevel::Success, "second");
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0], (NoticeLevel::Error, "first".to_string()));
        assert_eq!(drained[1], (NoticeLevel::Success, "second".to_string()));
        assert!(queue.is_empty());
    }

    #[test]
    fn notice_labels() {
        assert_eq!(NoticeLevel::Info.label(), "info");
        assert_eq!(NoticeLevel::Success.label(), "ok");
        assert_eq!(NoticeLevel::Error.label(), "error");
    }
}
