//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the pieces of
//! state every command needs and threads them through explicitly:
//!
//! - the [`RecordStore`] backend,
//! - the [`CredentialVerifier`] used by login,
//! - the [`SessionState`] (locked / unlocked),
//! - the [`EditingContext`] (current selection).
//!
//! Nothing here validates input or formats output: validation is the commands'
//! job and presentation belongs to the form and the terminal client.
//!
//! ## Generic Over RecordStore
//!
//! `RosterApi<S, V>` is generic over the storage backend:
//! - Production: `RosterApi<SqliteStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::editing::EditingContext;
use crate::error::Result;
use crate::model::StudentDraft;
use crate::session::{CredentialVerifier, FixedCredentials, SessionState};
use crate::store::RecordStore;

pub struct RosterApi<S: RecordStore, V: CredentialVerifier = FixedCredentials> {
    store: S,
    verifier: V,
    session: SessionState,
    editing: EditingContext,
}

impl<S: RecordStore> RosterApi<S, FixedCredentials> {
    pub fn new(store: S) -> Self {
        Self::with_verifier(store, FixedCredentials::default())
    }
}

impl<S: RecordStore, V: CredentialVerifier> RosterApi<S, V> {
    pub fn with_verifier(store: S, verifier: V) -> Self {
        Self {
            store,
            verifier,
            session: SessionState::locked(),
            editing: EditingContext::new(),
        }
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<commands::CmdResult> {
        commands::login::run(&self.verifier, &mut self.session, username, password)
    }

    pub fn add_student(&mut self, draft: &StudentDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.session, draft)
    }

    pub fn update_student(&mut self, draft: &StudentDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &self.session, &self.editing, draft)
    }

    pub fn delete_student(&mut self) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.session, &self.editing)
    }

    pub fn search_students(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &self.session, keyword)
    }

    pub fn list_all_students(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.session, &mut self.editing)
    }

    pub fn wipe_students(&mut self) -> Result<commands::CmdResult> {
        commands::wipe::run(&mut self.store)
    }

    pub fn init(&self, location: &str) -> Result<commands::CmdResult> {
        commands::init::run(&self.store, location)
    }

    pub fn select(&mut self, student_id: impl Into<String>) {
        self.editing.select(student_id);
    }

    pub fn clear_selection(&mut self) {
        self.editing.clear();
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.editing.selected()
    }

    pub fn is_unlocked(&self) -> bool {
        self.session.unlocked
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
