//! Interactive form session: one action per input line.

use super::print::{print_form, print_grid, print_notice, print_shell_help};
use roster::error::Result;
use roster::form::{Field, Form, Notice};
use roster::session::CredentialVerifier;
use roster::store::RecordStore;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ShellCommand {
    Login { username: String, password: String },
    Set { field: Field, value: String },
    Add,
    Update,
    Delete,
    View,
    Search(Option<String>),
    Select(usize),
    Pick(String),
    Clear,
    Form,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. `Ok(None)` means a blank line.
    pub(super) fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(username), Some(password), None) => ShellCommand::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    },
                    _ => return Err("Usage: login <user> <password>".to_string()),
                }
            }
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                if name.is_empty() {
                    return Err("Usage: set <id|name|contact|grade> <value>".to_string());
                }
                ShellCommand::Set {
                    field: name.parse()?,
                    value: value.to_string(),
                }
            }
            "add" => ShellCommand::Add,
            "update" => ShellCommand::Update,
            "delete" | "rm" => ShellCommand::Delete,
            "view" | "list" | "ls" => ShellCommand::View,
            "search" | "find" => {
                ShellCommand::Search((!rest.is_empty()).then(|| rest.to_string()))
            }
            "select" => {
                let row: usize = rest
                    .parse()
                    .map_err(|_| "Usage: select <row number>".to_string())?;
                if row == 0 {
                    return Err("Rows are numbered from 1".to_string());
                }
                ShellCommand::Select(row - 1)
            }
            "pick" => {
                if rest.is_empty() {
                    return Err("Usage: pick <student-id>".to_string());
                }
                ShellCommand::Pick(rest.to_string())
            }
            "clear" => ShellCommand::Clear,
            "form" | "show" => ShellCommand::Form,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                ))
            }
        };
        Ok(Some(command))
    }
}

/// Drive the form from `input` until EOF or `quit`. Prompts are shown only when `interactive`.
pub(super) fn run_session<S, V, R>(
    form: &mut Form<S, V>,
    input: R,
    interactive: bool,
) -> Result<()>
where
    S: RecordStore,
    V: CredentialVerifier,
    R: BufRead,
{
    if interactive {
        println!("Student roster. Log in with 'login <user> <password>'; 'help' lists commands.");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{} ", if form.is_enabled() { "roster>" } else { "login>" });
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(hint) => {
                println!("{}", hint);
                continue;
            }
        };
        if !matches!(command, ShellCommand::Login { .. }) {
            tracing::debug!(?command, "shell command");
        }

        if command == ShellCommand::Quit {
            break;
        }
        dispatch(form, command);
    }
    Ok(())
}

fn dispatch<S: RecordStore, V: CredentialVerifier>(form: &mut Form<S, V>, command: ShellCommand) {
    match command {
        ShellCommand::Login { username, password } => print_notice(&form.login(&username, &password)),
        ShellCommand::Set { field, value } => report_edit(form.set_field(field, value)),
        ShellCommand::Add => show_with_grid(form, |f| f.add()),
        ShellCommand::Update => show_with_grid(form, |f| f.update()),
        ShellCommand::Delete => show_with_grid(form, |f| f.delete()),
        ShellCommand::View => show_with_grid(form, |f| f.view_all()),
        ShellCommand::Search(keyword) => {
            if let Some(keyword) = keyword {
                if let Some(notice) = form.set_search(keyword) {
                    print_notice(&notice);
                    return;
                }
            }
            show_with_grid(form, |f| f.search())
        }
        ShellCommand::Select(row) => match form.select_row(row) {
            Some(notice) => print_notice(&notice),
            None => print_form(form),
        },
        ShellCommand::Pick(id) => match form.select_id(&id) {
            Some(notice) => print_notice(&notice),
            None => print_form(form),
        },
        ShellCommand::Clear => print_notice(&form.clear_action()),
        ShellCommand::Form => print_form(form),
        ShellCommand::Help => print_shell_help(),
        ShellCommand::Quit => {}
    }
}

fn show_with_grid<S, V, F>(form: &mut Form<S, V>, action: F)
where
    S: RecordStore,
    V: CredentialVerifier,
    F: FnOnce(&mut Form<S, V>) -> Notice,
{
    let notice = action(form);
    print_notice(&notice);
    if form.is_enabled() && !notice.is_error() {
        print_grid(form.rows());
    }
}

fn report_edit(notice: Option<Notice>) {
    if let Some(notice) = notice {
        print_notice(&notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn login_needs_exactly_two_words() {
        assert_eq!(
            parse("login admin admin123"),
            ShellCommand::Login {
                username: "admin".into(),
                password: "admin123".into()
            }
        );
        assert!(ShellCommand::parse("login admin").is_err());
        assert!(ShellCommand::parse("login a b c").is_err());
    }

    #[test]
    fn set_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse("set name  Ann Marie Lee "),
            ShellCommand::Set {
                field: Field::Name,
                value: "Ann Marie Lee".into()
            }
        );
        assert_eq!(
            parse("set grade"),
            ShellCommand::Set {
                field: Field::Grade,
                value: String::new()
            }
        );
        assert!(ShellCommand::parse("set colour red").is_err());
    }

    #[test]
    fn select_is_one_based() {
        assert_eq!(parse("select 2"), ShellCommand::Select(1));
        assert!(ShellCommand::parse("select 0").is_err());
        assert!(ShellCommand::parse("select two").is_err());
    }

    #[test]
    fn search_keyword_is_optional() {
        assert_eq!(parse("search"), ShellCommand::Search(None));
        assert_eq!(
            parse("search Ann Lee"),
            ShellCommand::Search(Some("Ann Lee".into()))
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse("VIEW"), ShellCommand::View);
        assert_eq!(parse("Quit"), ShellCommand::Quit);
    }

    #[test]
    fn unknown_verb_gives_a_hint() {
        let err = ShellCommand::parse("frobnicate").unwrap_err();
        assert!(err.contains("help"));
    }

    #[test]
    fn session_reads_only_from_the_given_input() {
        use roster::api::RosterApi;
        use roster::store::memory::InMemoryStore;

        let mut form = Form::new(RosterApi::new(InMemoryStore::new()));
        let script = "login admin admin123\n\
                      set id S1\nset name Ann\nset contact 555\nset grade A\nadd\n\
                      quit\nset id S2\n";

        run_session(&mut form, std::io::Cursor::new(script), false).unwrap();

        assert!(form.is_enabled());
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.field(Field::StudentId), "");
    }
}
