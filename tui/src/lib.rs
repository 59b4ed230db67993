//! NoteBoard TUI: the terminal front end for the note board.
//!
//! The state machine ([`app`]) and the [`session`] that applies its actions
//! to the note store do no terminal I/O, so whole workflows are testable.
//! Rendering goes through ratatui and is checked against `TestBackend`.
//!
//! # Modules
//!
//! - [`app`]: view states, dialog stack, key routing, card selection
//! - [`dialogs`]: add-note form, confirm, alert and help overlays
//! - [`form`]: the add-note form and its focus ring
//! - [`grid`]: responsive card grid
//! - [`input`]: single and multi-line text editing
//! - [`session`]: owns the store and applies actions
//! - [`theme`]: color themes
//! - [`tui`]: crossterm event loop
//! - [`view`]: full-screen layout

pub mod app;
pub mod dialogs;
pub mod form;
pub mod grid;
pub mod input;
pub mod session;
pub mod theme;
pub mod tui;
pub mod view;
