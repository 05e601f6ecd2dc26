use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::StudentDraft;
use crate::session::SessionState;
use crate::store::RecordStore;

use super::helpers::validated_draft;

pub fn run<S: RecordStore>(
    store: &mut S,
    session: &SessionState,
    draft: &StudentDraft,
) -> Result<CmdResult> {
    session.require_unlocked()?;
    let draft = validated_draft(draft)?;

    if store.get(&draft.student_id)?.is_some() {
        return Err(RosterError::DuplicateKey(draft.student_id));
    }

    let record = draft.into_record();
    store.insert(&record)?;
    tracing::debug!(
        student_id = %record.student_id,
        name = %record.name,
        contact = %record.contact,
        grade = %record.grade,
        "added student"
    );

    let mut result = CmdResult::default().with_affected_records(vec![record]);
    result.add_message(CmdMessage::success("Student added successfully."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::test_support::{draft, unlocked};
    use crate::commands::list;
    use crate::editing::EditingContext;
    use crate::model::StudentRecord;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn added_student_appears_once_in_listing() {
        let mut store = InMemoryStore::new();
        run(&mut store, &unlocked(), &draft("S1", "Ann", "555-0001", "A")).unwrap();

        let listed = list::run(&store, &unlocked(), &mut EditingContext::new())
            .unwrap()
            .listed_records;
        assert_eq!(
            listed,
            vec![StudentRecord::new("S1", "Ann", "555-0001", "A")]
        );
    }

    #[test]
    fn fields_are_trimmed_before_saving() {
        let mut store = InMemoryStore::new();
        run(&mut store, &unlocked(), &draft(" S1 ", " Ann", "555 ", " A ")).unwrap();
        assert_eq!(store.get("S1").unwrap().unwrap().name, "Ann");
    }

    #[test]
    fn duplicate_id_is_rejected_and_store_unchanged() {
        let mut store = StoreFixture::new()
            .with_student("S1", "Ann", "555-0001", "A")
            .store;
        let before = store.list_all().unwrap();

        let err = run(&mut store, &unlocked(), &draft("S1", "Other", "555-9999", "C")).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(id) if id == "S1"));
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn blank_field_is_missing_info() {
        let mut store = InMemoryStore::new();
        for bad in [
            draft("", "Ann", "555", "A"),
            draft("S1", "  ", "555", "A"),
            draft("S1", "Ann", "", "A"),
            draft("S1", "Ann", "555", "\t"),
        ] {
            let err = run(&mut store, &unlocked(), &bad).unwrap_err();
            assert!(matches!(err, RosterError::MissingInfo(_)));
        }
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn locked_session_refuses_to_add() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            &SessionState::locked(),
            &draft("S1", "Ann", "555", "A"),
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::Locked));
        assert_eq!(store.count().unwrap(), 0);
    }
}
