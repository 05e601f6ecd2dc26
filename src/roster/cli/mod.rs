//! # Terminal Client
//!
//! This is **one possible UI client** for roster, standing in for the form window.
//! It is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Naked Execution (`roster`)
//!
//! Running `roster` with no subcommand opens the interactive form session, same as
//! `roster shell`. The session reads one action per line from stdin, so it can be
//! scripted: `printf 'login admin admin123\nview\n' | roster`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-subcommand handlers
//! - `shell`: The interactive session (line parsing + dispatch to the form)
//! - `print`: Output formatting (grid, notices, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;
mod shell;

pub use commands::run;
