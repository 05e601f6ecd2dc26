use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::{contains_keyword, StudentFields, StudentRecord};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<StudentRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, student_id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.student_id == student_id)
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&mut self, record: &StudentRecord) -> Result<()> {
        if self.position(&record.student_id).is_some() {
            return Err(RosterError::DuplicateKey(record.student_id.clone()));
        }
        self.records.push(record.clone());
        Ok(())
    }

    fn get(&self, student_id: &str) -> Result<Option<StudentRecord>> {
        Ok(self.position(student_id).map(|i| self.records[i].clone()))
    }

    fn update(&mut self, student_id: &str, fields: &StudentFields) -> Result<()> {
        let i = self
            .position(student_id)
            .ok_or_else(|| RosterError::StudentNotFound(student_id.to_string()))?;
        self.records[i] = fields.clone().into_record(student_id);
        Ok(())
    }

    fn rename(&mut self, old_id: &str, new_id: &str, fields: &StudentFields) -> Result<()> {
        if old_id == new_id {
            return self.update(old_id, fields);
        }
        let i = self
            .position(old_id)
            .ok_or_else(|| RosterError::StudentNotFound(old_id.to_string()))?;
        if self.position(new_id).is_some() {
            return Err(RosterError::DuplicateKey(new_id.to_string()));
        }
        // Delete + insert: the renamed record moves to the end, as a new SQLite row would.
        self.records.remove(i);
        self.records.push(fields.clone().into_record(new_id));
        Ok(())
    }

    fn delete(&mut self, student_id: &str) -> Result<bool> {
        match self.position(student_id) {
            Some(i) => {
                self.records.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list_all(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.records.clone())
    }

    fn search(&self, keyword: &str) -> Result<Vec<StudentRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| contains_keyword(&r.student_id, keyword) || contains_keyword(&r.name, keyword))
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }

    fn wipe(&mut self) -> Result<usize> {
        let removed = self.records.len();
        self.records.clear();
        Ok(removed)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = StudentRecord::new(
                    format!("S{}", i + 1),
                    format!("Student {}", i + 1),
                    format!("555-{:04}", i + 1),
                    "A",
                );
                self.store.insert(&record).unwrap();
            }
            self
        }

        pub fn with_student(mut self, id: &str, name: &str, contact: &str, grade: &str) -> Self {
            self.store
                .insert(&StudentRecord::new(id, name, contact, grade))
                .unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut store = StoreFixture::new().with_student("S1", "Ann", "555", "A").store;
        let err = store
            .insert(&StudentRecord::new("S1", "Other", "556", "B"))
            .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(id) if id == "S1"));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn rename_onto_existing_id_changes_nothing() {
        let mut store = StoreFixture::new().with_students(2).store;
        let before = store.list_all().unwrap();
        let fields = before[0].fields();

        let err = store.rename("S1", "S2", &fields).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateKey(_)));
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn delete_of_absent_id_is_neutral() {
        let mut store = StoreFixture::new().with_students(1).store;
        assert!(!store.delete("missing").unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }
}
