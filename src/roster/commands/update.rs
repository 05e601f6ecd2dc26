use crate::commands::{CmdMessage, CmdResult};
use crate::editing::EditingContext;
use crate::error::{Result, RosterError};
use crate::model::{StudentDraft, StudentRecord};
use crate::session::SessionState;
use crate::store::RecordStore;

use super::helpers::validated_draft;

/// Apply the draft to the selected record.
///
/// When the draft carries a different id the record is renamed, which the store
/// performs as a single delete + insert transaction.
pub fn run<S: RecordStore>(
    store: &mut S,
    session: &SessionState,
    editing: &EditingContext,
    draft: &StudentDraft,
) -> Result<CmdResult> {
    session.require_unlocked()?;
    let selected_id = editing
        .selected()
        .ok_or_else(|| RosterError::NoSelection("Select a student to update.".to_string()))?;
    let draft = validated_draft(draft)?;

    let record = StudentRecord::new(
        draft.student_id.clone(),
        draft.name,
        draft.contact,
        draft.grade,
    );
    let fields = record.fields();

    if record.student_id != selected_id {
        if store.get(&record.student_id)?.is_some() {
            return Err(RosterError::DuplicateKey(record.student_id));
        }
        store.rename(selected_id, &record.student_id, &fields)?;
        tracing::debug!(from = selected_id, to = %record.student_id, "renamed student");
    } else {
        store.update(selected_id, &fields)?;
    }
    tracing::debug!(
        student_id = %record.student_id,
        name = %record.name,
        contact = %record.contact,
        grade = %record.grade,
        "updated student"
    );

    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success("Student updated."));
    Ok(result)
}
