//! # Storage Layer
//!
//! This module defines the storage abstraction for the roster. The [`RecordStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite table
//!   - Schema is created if absent, never dropped on open
//!   - Renames run inside one transaction
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Keeps insertion order so listings are stable
//!
//! ## Storage Format
//!
//! For `SqliteStore`:
//! ```text
//! students
//! ├── student_id  TEXT PRIMARY KEY
//! ├── name        TEXT NOT NULL
//! ├── contact     TEXT NOT NULL
//! └── grade       TEXT NOT NULL
//! ```
//!
//! Every mutating call commits immediately; there is no batching.

use crate::error::Result;
use crate::model::{StudentFields, StudentRecord};

pub mod memory;
pub mod sqlite;

/// Abstract interface for student record storage.
///
/// Implementations must keep `student_id` unique at all times.
pub trait RecordStore {
    /// Persist a new record. Fails with `DuplicateKey` when the id is taken.
    fn insert(&mut self, record: &StudentRecord) -> Result<()>;

    /// Exact lookup by id.
    fn get(&self, student_id: &str) -> Result<Option<StudentRecord>>;

    /// Replace the non-id fields of an existing record.
    fn update(&mut self, student_id: &str, fields: &StudentFields) -> Result<()>;

    /// Move a record to a new id, replacing its fields. Either fully applies or changes nothing.
    fn rename(&mut self, old_id: &str, new_id: &str, fields: &StudentFields) -> Result<()>;

    /// Remove a record. Returns `false` when there was nothing to remove.
    fn delete(&mut self, student_id: &str) -> Result<bool>;

    /// All records in stable storage order.
    fn list_all(&self) -> Result<Vec<StudentRecord>>;

    /// Records whose id or name contains `keyword`.
    fn search(&self, keyword: &str) -> Result<Vec<StudentRecord>>;

    fn count(&self) -> Result<usize>;

    /// Remove every record, returning how many were removed.
    fn wipe(&mut self) -> Result<usize>;
}
