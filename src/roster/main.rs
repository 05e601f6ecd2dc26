//! The `roster` binary is intentionally thin: the terminal client lives in
//! `cli/`, and this file only invokes `cli::run()` and handles process
//! termination. Everything from `form.rs` inward is UI agnostic.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
