use crate::error::{Result, RosterError};
use crate::model::StudentDraft;

pub const FILL_ALL_FIELDS: &str = "Please fill all fields.";

/// Trim the draft and reject it when any field is left blank.
pub fn validated_draft(draft: &StudentDraft) -> Result<StudentDraft> {
    let draft = draft.normalized();
    if !draft.is_complete() {
        return Err(RosterError::MissingInfo(FILL_ALL_FIELDS.to_string()));
    }
    Ok(draft)
}
