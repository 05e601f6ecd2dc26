//! # Form Binding
//!
//! [`Form`] is the UI-agnostic model of the roster window: four editable detail
//! fields, a search box, and a results grid. A UI client feeds it user actions and
//! renders whatever state it exposes; the terminal client in `cli/` is one such
//! client.
//!
//! ## Contract
//!
//! - Every action (`login`, `add`, `update`, `delete`, `view_all`, `search`,
//!   `clear_action`) returns exactly one [`Notice`], success or failure.
//! - After a successful mutation the grid is reloaded from the store and the
//!   editing context (fields + selection) is reset. There is no partial update.
//! - Until login succeeds every control except login is disabled.

use crate::api::RosterApi;
use crate::commands::{CmdResult, MessageLevel};
use crate::error::RosterError;
use crate::model::{StudentDraft, StudentRecord};
use crate::session::{CredentialVerifier, FixedCredentials};
use crate::store::RecordStore;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StudentId,
    Name,
    Contact,
    Grade,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::StudentId => "Student ID",
            Field::Name => "Name",
            Field::Contact => "Contact",
            Field::Grade => "Grade",
        }
    }

    pub fn all() -> &'static [Field] {
        &[Field::StudentId, Field::Name, Field::Contact, Field::Grade]
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "student_id" | "student-id" => Ok(Field::StudentId),
            "name" => Ok(Field::Name),
            "contact" => Ok(Field::Contact),
            "grade" => Ok(Field::Grade),
            other => Err(format!(
                "Unknown field '{}' (expected id, name, contact or grade)",
                other
            )),
        }
    }
}

/// A modal acknowledgment: one per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(level: MessageLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn from_error(err: &RosterError) -> Self {
        let level = if err.is_user_error() {
            MessageLevel::Warning
        } else {
            MessageLevel::Error
        };
        Self::new(level, err.title(), err.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self.level, MessageLevel::Error | MessageLevel::Warning)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

pub struct Form<S: RecordStore, V: CredentialVerifier = FixedCredentials> {
    api: RosterApi<S, V>,
    fields: StudentDraft,
    search: String,
    rows: Vec<StudentRecord>,
}

impl<S: RecordStore, V: CredentialVerifier> Form<S, V> {
    pub fn new(api: RosterApi<S, V>) -> Self {
        Self {
            api,
            fields: StudentDraft::default(),
            search: String::new(),
            rows: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api.is_unlocked()
    }

    pub fn fields(&self) -> &StudentDraft {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::StudentId => &self.fields.student_id,
            Field::Name => &self.fields.name,
            Field::Contact => &self.fields.contact,
            Field::Grade => &self.fields.grade,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn rows(&self) -> &[StudentRecord] {
        &self.rows
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.api.selected_id()
    }

    /// Edit one detail field. Returns a notice only when the field is disabled.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Option<Notice> {
        if let Some(notice) = self.disabled_notice() {
            return Some(notice);
        }
        let value = value.into();
        match field {
            Field::StudentId => self.fields.student_id = value,
            Field::Name => self.fields.name = value,
            Field::Contact => self.fields.contact = value,
            Field::Grade => self.fields.grade = value,
        }
        None
    }

    pub fn set_search(&mut self, keyword: impl Into<String>) -> Option<Notice> {
        if let Some(notice) = self.disabled_notice() {
            return Some(notice);
        }
        self.search = keyword.into();
        None
    }

    /// Reflect a grid row into the detail fields and make it the selection.
    pub fn select_row(&mut self, index: usize) -> Option<Notice> {
        if let Some(notice) = self.disabled_notice() {
            return Some(notice);
        }
        match self.rows.get(index).cloned() {
            Some(record) => {
                self.select(&record);
                None
            }
            None => Some(Notice::new(
                MessageLevel::Warning,
                "No Selection",
                format!("There is no row {} in the list.", index + 1),
            )),
        }
    }

    /// Select by identifier, looking in the grid first and then in the store.
    pub fn select_id(&mut self, student_id: &str) -> Option<Notice> {
        if let Some(notice) = self.disabled_notice() {
            return Some(notice);
        }
        let student_id = student_id.trim();
        let found = match self.rows.iter().find(|r| r.student_id == student_id) {
            Some(record) => Ok(Some(record.clone())),
            None => self.api.store().get(student_id),
        };
        match found {
            Ok(Some(record)) => {
                self.select(&record);
                None
            }
            Ok(None) => Some(Notice::from_error(&RosterError::StudentNotFound(
                student_id.to_string(),
            ))),
            Err(e) => Some(self.report(e)),
        }
    }

    fn select(&mut self, record: &StudentRecord) {
        self.fields = StudentDraft::from(record);
        self.api.select(record.student_id.clone());
        tracing::debug!(student_id = %record.student_id, "selected student");
    }

    /// Empty every input and drop the selection.
    pub fn clear(&mut self) {
        self.fields = StudentDraft::default();
        self.search.clear();
        self.api.clear_selection();
    }

    pub fn login(&mut self, username: &str, password: &str) -> Notice {
        match self.api.login(username, password) {
            Ok(result) => Notice::new(
                MessageLevel::Success,
                "Login Successful",
                result.success_message().unwrap_or("Logged in."),
            ),
            Err(e) => self.report(e),
        }
    }

    pub fn add(&mut self) -> Notice {
        let draft = self.fields.clone();
        let outcome = self.api.add_student(&draft);
        self.after_mutation("Success", outcome)
    }

    pub fn update(&mut self) -> Notice {
        let draft = self.fields.clone();
        let outcome = self.api.update_student(&draft);
        self.after_mutation("Success", outcome)
    }

    pub fn delete(&mut self) -> Notice {
        let outcome = self.api.delete_student();
        self.after_mutation("Deleted", outcome)
    }

    pub fn view_all(&mut self) -> Notice {
        match self.reload() {
            Ok(count) => Notice::new(
                MessageLevel::Info,
                "Students",
                format!("Showing {} student(s).", count),
            ),
            Err(e) => self.report(e),
        }
    }

    pub fn search(&mut self) -> Notice {
        let outcome = self.api.search_students(&self.search);
        match outcome {
            Ok(result) => {
                let count = result.listed_records.len();
                let no_results = result.no_results;
                self.rows = result.listed_records;
                if no_results {
                    Notice::new(MessageLevel::Info, "No Results", "No matching student found.")
                } else {
                    Notice::new(
                        MessageLevel::Info,
                        "Search Results",
                        format!("Found {} matching student(s).", count),
                    )
                }
            }
            Err(e) => {
                if !matches!(e, RosterError::MissingInfo(_) | RosterError::Locked) {
                    self.rows.clear();
                }
                self.report(e)
            }
        }
    }

    /// The Clear button.
    pub fn clear_action(&mut self) -> Notice {
        if let Some(notice) = self.disabled_notice() {
            return notice;
        }
        self.clear();
        Notice::new(MessageLevel::Info, "Cleared", "Form cleared.")
    }

    fn after_mutation(&mut self, title: &str, outcome: crate::error::Result<CmdResult>) -> Notice {
        let result = match outcome {
            Ok(result) => result,
            Err(e) => return self.report(e),
        };
        let message = result.success_message().unwrap_or("Done.").to_string();

        match self.reload() {
            Ok(_) => Notice::new(MessageLevel::Success, title, message),
            Err(e) => {
                tracing::error!(error = %e, "could not refresh student list");
                Notice::new(
                    MessageLevel::Warning,
                    title,
                    format!("{} However, the list could not be refreshed: {}", message, e),
                )
            }
        }
    }

    /// Reload the grid from the store and reset the editing context.
    fn reload(&mut self) -> crate::error::Result<usize> {
        let listing = self.api.list_all_students()?;
        self.rows = listing.listed_records;
        self.clear();
        Ok(self.rows.len())
    }

    fn report(&self, err: RosterError) -> Notice {
        if err.is_user_error() {
            tracing::warn!(error = %err, "command rejected");
        } else {
            tracing::error!(error = %err, "command failed");
        }
        Notice::from_error(&err)
    }

    fn disabled_notice(&self) -> Option<Notice> {
        if self.is_enabled() {
            None
        } else {
            Some(Notice::from_error(&RosterError::Locked))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::model::StudentFields;
    use crate::store::memory::InMemoryStore;

    /// Wraps the in-memory store and fails chosen operations with a storage error.
    struct BrokenStore {
        inner: InMemoryStore,
        fail_insert: bool,
        fail_list_after_insert: bool,
        inserted: bool,
    }

    impl BrokenStore {
        fn new(inner: InMemoryStore) -> Self {
            Self {
                inner,
                fail_insert: false,
                fail_list_after_insert: false,
                inserted: false,
            }
        }
    }

    fn storage_failure() -> RosterError {
        RosterError::Storage(rusqlite::Error::InvalidQuery)
    }

    impl RecordStore for BrokenStore {
        fn insert(&mut self, record: &StudentRecord) -> crate::error::Result<()> {
            if self.fail_insert {
                return Err(storage_failure());
            }
            self.inner.insert(record)?;
            self.inserted = true;
            Ok(())
        }

        fn get(&self, student_id: &str) -> crate::error::Result<Option<StudentRecord>> {
            self.inner.get(student_id)
        }

        fn update(&mut self, student_id: &str, fields: &StudentFields) -> crate::error::Result<()> {
            self.inner.update(student_id, fields)
        }

        fn rename(
            &mut self,
            old_id: &str,
            new_id: &str,
            fields: &StudentFields,
        ) -> crate::error::Result<()> {
            self.inner.rename(old_id, new_id, fields)
        }

        fn delete(&mut self, student_id: &str) -> crate::error::Result<bool> {
            self.inner.delete(student_id)
        }

        fn list_all(&self) -> crate::error::Result<Vec<StudentRecord>> {
            if self.fail_list_after_insert && self.inserted {
                return Err(storage_failure());
            }
            self.inner.list_all()
        }

        fn search(&self, keyword: &str) -> crate::error::Result<Vec<StudentRecord>> {
            self.inner.search(keyword)
        }

        fn count(&self) -> crate::error::Result<usize> {
            self.inner.count()
        }

        fn wipe(&mut self) -> crate::error::Result<usize> {
            self.inner.wipe()
        }
    }

    fn unlocked_broken_form(store: BrokenStore) -> Form<BrokenStore> {
        let mut form = Form::new(RosterApi::new(store));
        form.login("admin", "admin123");
        assert!(form.is_enabled());
        form
    }

    fn fill_broken(form: &mut Form<BrokenStore>) {
        assert!(form.set_field(Field::StudentId, "S9").is_none());
        assert!(form.set_field(Field::Name, "Ann").is_none());
        assert!(form.set_field(Field::Contact, "555").is_none());
        assert!(form.set_field(Field::Grade, "A").is_none());
    }

    fn unlocked_form(store: InMemoryStore) -> Form<InMemoryStore> {
        let mut form = Form::new(RosterApi::new(store));
        assert_eq!(form.login("admin", "admin123").level, MessageLevel::Success);
        form
    }

    fn fill(form: &mut Form<InMemoryStore>, id: &str, name: &str, contact: &str, grade: &str) {
        assert!(form.set_field(Field::StudentId, id).is_none());
        assert!(form.set_field(Field::Name, name).is_none());
        assert!(form.set_field(Field::Contact, contact).is_none());
        assert!(form.set_field(Field::Grade, grade).is_none());
    }

    #[test]
    fn controls_are_disabled_until_login() {
        let mut form = Form::new(RosterApi::new(InMemoryStore::new()));
        assert!(!form.is_enabled());
        assert_eq!(form.set_field(Field::Name, "Ann").unwrap().title, "Locked");
        assert_eq!(form.add().title, "Locked");
        assert_eq!(form.view_all().title, "Locked");
        assert_eq!(form.clear_action().title, "Locked");

        let denied = form.login("admin", "wrong");
        assert_eq!(denied.title, "Access Denied");
        assert!(!form.is_enabled());

        assert_eq!(form.login("admin", "admin123").body, "Welcome, Admin!");
        assert!(form.is_enabled());
    }

    #[test]
    fn successful_add_refreshes_grid_and_resets_fields() {
        let mut form = unlocked_form(InMemoryStore::new());
        fill(&mut form, "S1", "Ann", "555-0001", "A");

        let notice = form.add();
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.body, "Student added successfully.");
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.fields(), &StudentDraft::default());
        assert_eq!(form.selected_id(), None);
    }

    #[test]
    fn failed_add_keeps_the_typed_values() {
        let mut form = unlocked_form(StoreFixture::new().with_students(1).store);
        fill(&mut form, "S1", "Dup", "555", "A");

        let notice = form.add();
        assert_eq!(notice.title, "Duplicate ID");
        assert_eq!(form.field(Field::Name), "Dup");
    }

    #[test]
    fn selecting_a_row_fills_fields_and_enables_update() {
        let mut form = unlocked_form(StoreFixture::new().with_students(2).store);
        form.view_all();
        assert!(form.select_row(1).is_none());
        assert_eq!(form.field(Field::StudentId), "S2");
        assert_eq!(form.selected_id(), Some("S2"));

        form.set_field(Field::Grade, "B-");
        let notice = form.update();
        assert_eq!(notice.body, "Student updated.");
        assert_eq!(form.rows()[1].grade, "B-");
        assert_eq!(form.selected_id(), None);
    }

    #[test]
    fn update_without_selection_warns() {
        let mut form = unlocked_form(StoreFixture::new().with_students(1).store);
        fill(&mut form, "S1", "Ann", "555", "A");
        let notice = form.update();
        assert_eq!(notice.title, "No Selection");
        assert_eq!(notice.level, MessageLevel::Warning);
    }

    #[test]
    fn delete_uses_selection_by_id() {
        let mut form = unlocked_form(StoreFixture::new().with_students(3).store);
        assert!(form.select_id("S3").is_none());
        let notice = form.delete();
        assert_eq!(notice.title, "Deleted");
        assert_eq!(notice.body, "Student 'S3' deleted successfully.");
        assert_eq!(form.rows().len(), 2);
    }

    #[test]
    fn selecting_unknown_id_reports_not_found() {
        let mut form = unlocked_form(InMemoryStore::new());
        assert_eq!(form.select_id("S9").unwrap().title, "Not Found");
        assert_eq!(form.select_row(0).unwrap().title, "No Selection");
    }

    #[test]
    fn search_with_no_hits_empties_grid_and_says_so() {
        let mut form = unlocked_form(StoreFixture::new().with_students(2).store);
        form.view_all();
        form.set_search("nobody");
        let notice = form.search();
        assert_eq!(notice.title, "No Results");
        assert!(form.rows().is_empty());
    }

    #[test]
    fn blank_search_keeps_grid() {
        let mut form = unlocked_form(StoreFixture::new().with_students(2).store);
        form.view_all();
        let notice = form.search();
        assert_eq!(notice.title, "Missing Info");
        assert_eq!(form.rows().len(), 2);
    }

    #[test]
    fn clear_resets_fields_search_and_selection() {
        let mut form = unlocked_form(StoreFixture::new().with_students(1).store);
        form.select_id("S1");
        form.set_search("S");
        let notice = form.clear_action();
        assert_eq!(notice.title, "Cleared");
        assert_eq!(form.fields(), &StudentDraft::default());
        assert_eq!(form.search_text(), "");
        assert_eq!(form.selected_id(), None);
    }

    #[test]
    fn failed_refresh_after_add_is_one_warning_with_both_facts() {
        let mut store = BrokenStore::new(StoreFixture::new().with_students(1).store);
        store.fail_list_after_insert = true;
        let mut form = unlocked_broken_form(store);
        assert_eq!(form.view_all().level, MessageLevel::Info);
        assert_eq!(form.rows().len(), 1);
        fill_broken(&mut form);

        let notice = form.add();
        assert_eq!(notice.level, MessageLevel::Warning);
        assert_eq!(notice.title, "Success");
        assert!(notice.body.contains("Student added successfully."));
        assert!(notice.body.contains("Storage error"));

        // The grid is stale and the typed values stay put.
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.field(Field::StudentId), "S9");
        assert_eq!(form.field(Field::Name), "Ann");
        assert_eq!(form.selected_id(), None);
    }

    #[test]
    fn storage_failure_on_insert_is_a_database_error() {
        let mut store = BrokenStore::new(StoreFixture::new().with_students(2).store);
        store.fail_insert = true;
        let mut form = unlocked_broken_form(store);
        form.view_all();
        fill_broken(&mut form);

        let notice = form.add();
        assert_eq!(notice.level, MessageLevel::Error);
        assert_eq!(notice.title, "Database Error");
        assert!(notice.is_error());
        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.field(Field::StudentId), "S9");
    }
}
