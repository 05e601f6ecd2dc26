use crate::commands::{CmdMessage, CmdResult};
use crate::editing::EditingContext;
use crate::error::{Result, RosterError};
use crate::session::SessionState;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(
    store: &mut S,
    session: &SessionState,
    editing: &EditingContext,
) -> Result<CmdResult> {
    session.require_unlocked()?;
    let student_id = editing.selected().ok_or_else(|| {
        RosterError::NoSelection("Please select a student to delete.".to_string())
    })?;

    let removed = store.get(student_id)?;
    if store.delete(student_id)? {
        tracing::debug!(student_id, "deleted student");
    } else {
        tracing::debug!(student_id, "delete target was already gone");
    }

    let mut result = CmdResult::default().with_affected_records(removed.into_iter().collect());
    result.add_message(CmdMessage::success(format!(
        "Student '{}' deleted successfully.",
        student_id
    )));
    Ok(result)
}
