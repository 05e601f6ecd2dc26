use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::{StudentFields, StudentRecord};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};

const CREATE_STUDENTS_SQL: &str = r"
CREATE TABLE IF NOT EXISTS students (
  student_id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  contact TEXT NOT NULL,
  grade TEXT NOT NULL
);
";

const SELECT_COLUMNS: &str = "SELECT student_id, name, contact, grade FROM students";

pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema exists.
    ///
    /// Existing data is always preserved; wiping is a separate, explicit operation.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.init_schema()?;
        tracing::debug!(path = %path.display(), "opened student database");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Location of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(CREATE_STUDENTS_SQL)?;
        Ok(())
    }

    fn query_records(&self, sql: &str, keyword: Option<&str>) -> Result<Vec<StudentRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = match keyword {
            Some(pattern) => stmt.query_map(params![pattern], record_from_row)?,
            None => stmt.query_map([], record_from_row)?,
        };

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<StudentRecord> {
    Ok(StudentRecord {
        student_id: row.get(0)?,
        name: row.get(1)?,
        contact: row.get(2)?,
        grade: row.get(3)?,
    })
}

/// Turn a primary-key violation into `DuplicateKey`; everything else is a storage failure.
fn map_insert_error(err: rusqlite::Error, student_id: &str) -> RosterError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RosterError::DuplicateKey(student_id.to_string())
        }
        _ => RosterError::Storage(err),
    }
}

/// Escape `LIKE` metacharacters so the keyword only ever matches literally.
fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl RecordStore for SqliteStore {
    fn insert(&mut self, record: &StudentRecord) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO students (student_id, name, contact, grade) VALUES (?1, ?2, ?3, ?4)",
                params![record.student_id, record.name, record.contact, record.grade],
            )
            .map_err(|e| map_insert_error(e, &record.student_id))?;
        Ok(())
    }

    fn get(&self, student_id: &str) -> Result<Option<StudentRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE student_id = ?1"),
                params![student_id],
                record_from_row,
            )
            .optional()?;
        Ok(record)
    }

    fn update(&mut self, student_id: &str, fields: &StudentFields) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE students SET name = ?1, contact = ?2, grade = ?3 WHERE student_id = ?4",
            params![fields.name, fields.contact, fields.grade, student_id],
        )?;
        if changed == 0 {
            return Err(RosterError::StudentNotFound(student_id.to_string()));
        }
        Ok(())
    }

    fn rename(&mut self, old_id: &str, new_id: &str, fields: &StudentFields) -> Result<()> {
        if old_id == new_id {
            return self.update(old_id, fields);
        }

        // Dropping `tx` on an early return rolls both statements back.
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM students WHERE student_id = ?1", params![old_id])?;
        if removed == 0 {
            return Err(RosterError::StudentNotFound(old_id.to_string()));
        }
        tx.execute(
            "INSERT INTO students (student_id, name, contact, grade) VALUES (?1, ?2, ?3, ?4)",
            params![new_id, fields.name, fields.contact, fields.grade],
        )
        .map_err(|e| map_insert_error(e, new_id))?;
        tx.commit()?;
        Ok(())
    }

    fn delete(&mut self, student_id: &str) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM students WHERE student_id = ?1",
            params![student_id],
        )?;
        Ok(removed > 0)
    }

    fn list_all(&self) -> Result<Vec<StudentRecord>> {
        self.query_records(&format!("{SELECT_COLUMNS} ORDER BY rowid"), None)
    }

    fn search(&self, keyword: &str) -> Result<Vec<StudentRecord>> {
        let pattern = like_pattern(keyword);
        self.query_records(
            &format!(
                r"{SELECT_COLUMNS}
                  WHERE student_id LIKE ?1 ESCAPE '\' OR name LIKE ?1 ESCAPE '\'
                  ORDER BY rowid"
            ),
            Some(&pattern),
        )
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn wipe(&mut self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM students", [])?;
        Ok(removed)
    }
}
