use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("{0}")]
    MissingInfo(String),

    #[error("Student ID already exists: {0}")]
    DuplicateKey(String),

    #[error("{0}")]
    NoSelection(String),

    #[error("Invalid username or password.")]
    AccessDenied,

    #[error("Log in to manage student records.")]
    Locked,

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    /// Heading shown on the notice that reports this error.
    pub fn title(&self) -> &'static str {
        match self {
            RosterError::MissingInfo(_) => "Missing Info",
            RosterError::DuplicateKey(_) => "Duplicate ID",
            RosterError::NoSelection(_) => "No Selection",
            RosterError::AccessDenied => "Access Denied",
            RosterError::Locked => "Locked",
            RosterError::StudentNotFound(_) => "Not Found",
            RosterError::Storage(_) => "Database Error",
            RosterError::Io(_) | RosterError::Serialization(_) | RosterError::Config(_) => "Error",
        }
    }

    /// Rejections caused by user input, as opposed to failures of the system itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RosterError::MissingInfo(_)
                | RosterError::DuplicateKey(_)
                | RosterError::NoSelection(_)
                | RosterError::AccessDenied
                | RosterError::Locked
                | RosterError::StudentNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
