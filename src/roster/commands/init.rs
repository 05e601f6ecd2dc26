use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Report on a freshly opened store; opening it already created the schema.
pub fn run<S: RecordStore>(store: &S, location: &str) -> Result<CmdResult> {
    let count = store.count()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized roster database at {}",
        location
    )));
    result.add_message(CmdMessage::info(format!("{} student record(s) on file.", count)));
    Ok(result)
}
