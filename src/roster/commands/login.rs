use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{self, CredentialVerifier, SessionState};

pub fn run<V: CredentialVerifier + ?Sized>(
    verifier: &V,
    session: &mut SessionState,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    session::login(verifier, session, username, password)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Welcome, {}!",
        capitalize(username.trim())
    )));
    Ok(result)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
