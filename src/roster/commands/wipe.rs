use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Remove every student record. Administrative; never run implicitly.
pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let removed = store.wipe()?;
    tracing::info!(removed, "wiped student table");

    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info("No students to remove."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Removed {} student record(s).",
            removed
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empties_the_store() {
        let mut store = StoreFixture::new().with_students(3).store;
        let result = run(&mut store).unwrap();
        assert_eq!(
            result.success_message(),
            Some("Removed 3 student record(s).")
        );
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn empty_store_is_reported_as_info() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        assert!(result.success_message().is_none());
        assert_eq!(result.messages[0].content, "No students to remove.");
    }
}
