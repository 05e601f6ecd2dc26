//! # Roster Architecture
//!
//! Roster is a small student roster manager: a table of student records
//! (identifier, name, contact, grade) behind a login-gated form. The library is
//! UI-agnostic; the bundled terminal client is one way to drive it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Terminal client (cli/, wired by main.rs)                   │
//! │  - Parses arguments, reads form actions, prints the grid    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Form binding (form.rs)                                     │
//! │  - Detail fields, search box, results grid, selection       │
//! │  - One Notice per user action, full refresh after mutations │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns session + editing context, threads them into cmds   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Session gate, required fields, duplicate-id checks       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `form.rs` inward nothing writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Validation and business rules, one module per command
//! - [`config`]: Configuration file handling
//! - [`editing`]: The current selection
//! - [`error`]: Error types
//! - [`form`]: The form/grid binding
//! - [`model`]: `StudentRecord` and friends
//! - [`session`]: Login gate and credential verification
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod commands;
pub mod config;
pub mod editing;
pub mod error;
pub mod form;
pub mod model;
pub mod session;
pub mod store;
