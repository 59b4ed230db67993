//! Add/delete flows of the note board, independent of any UI toolkit.
//!
//! A view collects form values and dialog answers; these functions apply
//! them to a [`NoteStore`] and report through [`Notify`]. Persistence
//! failures are returned, not notified, so the view can choose how loudly
//! to show them.

use log::debug;

use crate::dialog::{Confirm, NoticeLevel, Notify, MISSING_FIELDS_MESSAGE, NOTE_ADDED_MESSAGE};
use crate::store::kv::KeyValueStore;
use crate::store::notes::{DeleteOutcome, NoteError, NoteStore, Persisted};
use crate::types::note::NoteDraft;


/// Validate and add a note from submitted form values.
///
/// On an empty field the user is told to fill out all fields and the store
/// is untouched. On success the user is told the note was added.
pub fn submit_note<S: KeyValueStore>(
    store: &mut NoteStore<S>,
    draft: NoteDraft,
    notify: &mut dyn Notify,
) -> Result<Persisted, NoteError> {
    match store.add(draft) {
        Ok((_, persisted)) => {
            notify.notify(NoticeLevel::Success, NOTE_ADDED_MESSAGE);
            Ok(persisted)
        }
        Err(e) => {
            debug!("event=note_submit module=board status=rejected reason={}", e);
            notify.notify(NoticeLevel::Error, MISSING_FIELDS_MESSAGE);
            Err(e)
        }
    }
}


/// Delete the note at `index` once `confirm` agrees.
pub fn delete_note<S: KeyValueStore>(
    store: &mut NoteStore<S>,
    index: usize,
    confirm: &mut dyn Confirm,
) -> Result<DeleteOutcome, NoteError> {
    let outcome = store.delete_at(index, confirm)?;
    if outcome == DeleteOutcome::Declined {
        debug!("event=note_delete module=board status=declined index={}", index);
    }
    Ok(outcome)
}
