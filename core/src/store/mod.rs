//! Note persistence: the key-value abstraction and the note list built on it.

pub mod kv;
pub mod notes;

pub use kv::{validate_key, FileStore, KeyValueStore, MemoryStore, StoreError};
pub use notes::{DeleteOutcome, NoteError, NoteStore, Persisted, DEFAULT_STORAGE_KEY};
