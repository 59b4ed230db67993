//! NoteBoard core: the note list, its validation rules, and its durable
//! key-value persistence.
//!
//! This crate does no terminal I/O. A view owns a [`NoteStore`] and drives
//! it through the flows in [`board`], answering confirmations and showing
//! notices through the traits in [`dialog`].
//!
//! # Modules
//!
//! - [`types`]: `Note` and `NoteDraft`
//! - [`store`]: key-value backends and `NoteStore`
//! - [`dialog`]: `Confirm` / `Notify` interfaces and fixed UI texts
//! - [`board`]: submit and delete flows
//! - [`config`]: `config.yaml` settings
//! - [`logging`]: rotating file logs

pub mod board;
pub mod config;
pub mod dialog;
pub mod logging;
pub mod store;
pub mod types;

pub use board::{delete_note, submit_note};
pub use config::{ConfigError, Settings};
pub use dialog::{Confirm, DialogAnswer, NoticeLevel, NoticeQueue, Notify};
pub use store::{
    DeleteOutcome, FileStore, KeyValueStore, MemoryStore, NoteError, NoteStore, Persisted,
    StoreError,
};
pub use types::note::{Note, NoteDraft, ValidationError};
