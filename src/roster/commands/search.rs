use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::session::SessionState;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, session: &SessionState, keyword: &str) -> Result<CmdResult> {
    session.require_unlocked()?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(RosterError::MissingInfo(
            "Enter a Student ID or Name to search.".to_string(),
        ));
    }

    let matches = store.search(keyword)?;
    tracing::debug!(keyword, hits = matches.len(), "searched students");

    let mut result = CmdResult::default().with_listed_records(matches);
    if result.listed_records.is_empty() {
        result.no_results = true;
        result.add_message(CmdMessage::info("No matching student found."));
    }
    Ok(result)
}
