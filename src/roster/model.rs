use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub contact: String,
    pub grade: String,
}

impl StudentRecord {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            contact: contact.into(),
            grade: grade.into(),
        }
    }

    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            contact: self.contact.clone(),
            grade: self.grade.clone(),
        }
    }
}

/// Everything about a student except the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub contact: String,
    pub grade: String,
}

impl StudentFields {
    pub fn into_record(self, student_id: impl Into<String>) -> StudentRecord {
        StudentRecord {
            student_id: student_id.into(),
            name: self.name,
            contact: self.contact,
            grade: self.grade,
        }
    }
}

/// Raw form values as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub student_id: String,
    pub name: String,
    pub contact: String,
    pub grade: String,
}

impl StudentDraft {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            contact: contact.into(),
            grade: grade.into(),
        }
    }

    /// Copy with surrounding whitespace stripped from every field.
    pub fn normalized(&self) -> Self {
        Self {
            student_id: self.student_id.trim().to_string(),
            name: self.name.trim().to_string(),
            contact: self.contact.trim().to_string(),
            grade: self.grade.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.student_id, &self.name, &self.contact, &self.grade]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn into_record(self) -> StudentRecord {
        StudentRecord {
            student_id: self.student_id,
            name: self.name,
            contact: self.contact,
            grade: self.grade,
        }
    }
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        Self::new(
            record.student_id.clone(),
            record.name.clone(),
            record.contact.clone(),
            record.grade.clone(),
        )
    }
}

/// Substring match used by keyword search: ASCII case-insensitive, like SQLite's `LIKE`.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&keyword.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_every_field() {
        let draft = StudentDraft::new(" S1 ", "Ann\t", "\n555", " A");
        assert_eq!(draft.normalized(), StudentDraft::new("S1", "Ann", "555", "A"));
    }

    #[test]
    fn whitespace_only_field_is_incomplete() {
        assert!(!StudentDraft::new("S1", "   ", "555", "A").is_complete());
        assert!(StudentDraft::new("S1", "Ann", "555", "A").is_complete());
    }

    #[test]
    fn keyword_match_ignores_ascii_case_only() {
        assert!(contains_keyword("Ann", "an"));
        assert!(contains_keyword("S42", "42"));
        assert!(!contains_keyword("Bob", "an"));
    }
}
