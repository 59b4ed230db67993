//! The add-note form bound to the modal.
//!
//! Holds the two field buffers and the focus ring
//! (Title → Text → [Add Note] → [Cancel]). Values are read once, at
//! submit time, through [`NoteForm::draft`].

use noteboard_core::NoteDraft;

use crate::app::Key;
use crate::input::TextInput;


/// Which element of the form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    Text,
    Submit,
    Cancel,
}


impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Text,
            FormFocus::Text => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Cancel,
            FormFocus::Cancel => FormFocus::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Cancel,
            FormFocus::Text => FormFocus::Title,
            FormFocus::Submit => FormFocus::Text,
            FormFocus::Cancel => FormFocus::Submit,
        }
    }
}


/// What the form asks its owner to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
}


/// Title and text fields of a note being composed.
#[derive(Debug, Clone)]
pub struct NoteForm {
    pub title: TextInput,
    pub text: TextInput,
    focus: FormFocus,
}


impl NoteForm {
    pub fn new() -> Self {
        NoteForm {
            title: TextInput::new(),
            text: TextInput::multiline(),
            focus: FormFocus::Title,
        }
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    /// Current field values.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.text(), self.text.text())
    }

    /// Empty both fields and return focus to the title.
    pub fn clear(&mut self) {
        self.title.clear();
        self.text.clear();
        self.focus = FormFocus::Title;
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.text.is_empty()
    }

    /// Route a key to the focused element.
    pub fn handle_key(&mut self, key: Key) -> Option<FormEvent> {
        match key {
            Key::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            Key::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            Key::Ctrl('s') => return Some(FormEvent::Submit),
            _ => {}
        }

        match self.focus {
            FormFocus::Submit | FormFocus::Cancel => self.handle_button_key(key),
            FormFocus::Title => {
                match key {
                    Key::Enter | Key::Down => self.focus = FormFocus::Text,
                    other => edit(&mut self.title, other),
                }
                None
            }
            FormFocus::Text => {
                match key {
                    Key::Enter => self.text.insert('\n'),
                    Key::Up => {
                        if !self.text.move_up() {
                            self.focus = FormFocus::Title;
                        }
                    }
                    Key::Down => {
                        self.text.move_down();
                    }
                    other => edit(&mut self.text, other),
                }
                None
            }
        }
    }

    fn handle_button_key(&mut self, key: Key) -> Option<FormEvent> {
        match key {
            Key::Enter | Key::Char(' ') => match self.focus {
                FormFocus::Submit => Some(FormEvent::Submit),
                _ => Some(FormEvent::Cancel),
            },
            Key::Left | Key::Right => {
                self.focus = if self.focus == FormFocus::Submit {
                    FormFocus::Cancel
                } else {
                    FormFocus::Submit
                };
                None
            }
            Key::Up => {
                self.focus = FormFocus::Text;
                None
            }
            _ => None,
        }
    }
}


impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}


/// Apply a line-editing key to a field.
fn edit(input: &mut TextInput, key: Key) {
    match key {
        Key::Char(ch) if !ch.is_control() => input.insert(ch),
        Key::Backspace => input.delete_back(),
        Key::Delete => input.delete_forward(),
        Key::Left => input.move_left(),
        Key::Right => input.move_right(),
        Key::Home | Key::Ctrl('a') => input.move_home(),
        Key::End | Key::Ctrl('e') => input.move_end(),
        Key::Ctrl('w') => input.delete_word_back(),
        Key::Ctrl('u') => input.delete_to_line_start(),
        _ => {}
    }
}
