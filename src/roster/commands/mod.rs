use crate::config::RosterConfig;
use crate::model::StudentRecord;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod login;
pub mod search;
pub mod update;
pub mod wipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<StudentRecord>,
    pub listed_records: Vec<StudentRecord>,
    /// Set by search when nothing matched. Not an error.
    pub no_results: bool,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The first success message, if the command produced one.
    pub fn success_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.level == MessageLevel::Success)
            .map(|m| m.content.as_str())
    }
}
