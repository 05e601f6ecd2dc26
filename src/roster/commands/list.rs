use crate::commands::CmdResult;
use crate::editing::EditingContext;
use crate::error::Result;
use crate::session::SessionState;
use crate::store::RecordStore;

/// List every record. Listing resets the editing context.
pub fn run<S: RecordStore>(
    store: &S,
    session: &SessionState,
    editing: &mut EditingContext,
) -> Result<CmdResult> {
    session.require_unlocked()?;
    let records = store.list_all()?;
    editing.clear();
    tracing::debug!(count = records.len(), "listed students");
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_support::unlocked;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_the_selection() {
        let store = StoreFixture::new().with_students(2).store;
        let mut ctx = EditingContext::new();
        ctx.select("S1");

        let result = run(&store, &unlocked(), &mut ctx).unwrap();
        assert_eq!(result.listed_records.len(), 2);
        assert_eq!(ctx.selected(), None);
    }

    #[test]
    fn repeated_listing_is_stable() {
        let store = StoreFixture::new().with_students(5).store;
        let mut ctx = EditingContext::new();
        let first = run(&store, &unlocked(), &mut ctx).unwrap().listed_records;
        let second = run(&store, &unlocked(), &mut ctx).unwrap().listed_records;
        assert_eq!(first, second);
    }

    #[test]
    fn locked_session_keeps_selection() {
        let store = StoreFixture::new().with_students(1).store;
        let mut ctx = EditingContext::new();
        ctx.select("S1");

        let err = run(&store, &SessionState::locked(), &mut ctx).unwrap_err();
        assert!(matches!(err, RosterError::Locked));
        assert_eq!(ctx.selected(), Some("S1"));
    }
}
