use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::form::{Field, Form, Notice};
use roster::model::StudentRecord;
use roster::session::CredentialVerifier;
use roster::store::RecordStore;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ROW_NUMBER_WIDTH: usize = 5;
const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 24;
const CONTACT_WIDTH: usize = 18;
const GRADE_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_notice(notice: &Notice) {
    let title = format!("[{}]", notice.title);
    let title = match notice.level {
        MessageLevel::Info => title.cyan(),
        MessageLevel::Success => title.green(),
        MessageLevel::Warning => title.yellow(),
        MessageLevel::Error => title.red(),
    };
    println!("{} {}", title.bold(), notice.body);
}

pub(super) fn print_grid(rows: &[StudentRecord]) {
    let header = format!(
        "{}{}{}{}{}",
        pad_to_width("#", ROW_NUMBER_WIDTH),
        pad_to_width("Student ID", ID_WIDTH),
        pad_to_width("Name", NAME_WIDTH),
        pad_to_width("Contact", CONTACT_WIDTH),
        pad_to_width("Grade", GRADE_WIDTH),
    );
    println!("{}", header.trim_end().bold());

    if rows.is_empty() {
        println!("{}", "  (no students)".dimmed());
        return;
    }

    for (i, record) in rows.iter().enumerate() {
        let line = format!(
            "{}{}{}{}{}",
            pad_to_width(&format!("{}.", i + 1), ROW_NUMBER_WIDTH),
            pad_to_width(&record.student_id, ID_WIDTH),
            pad_to_width(&record.name, NAME_WIDTH),
            pad_to_width(&record.contact, CONTACT_WIDTH),
            pad_to_width(&record.grade, GRADE_WIDTH),
        );
        println!("{}", line.trim_end());
    }
}

pub(super) fn print_form<S: RecordStore, V: CredentialVerifier>(form: &Form<S, V>) {
    for field in Field::all() {
        println!(
            "  {:<12}{}",
            format!("{}:", field.label()).dimmed(),
            form.field(*field)
        );
    }
    println!("  {:<12}{}", "Search:".dimmed(), form.search_text());
    match form.selected_id() {
        Some(id) => println!("  {:<12}{}", "Selected:".dimmed(), id.yellow()),
        None => println!("  {:<12}{}", "Selected:".dimmed(), "(none)".dimmed()),
    }
}

pub(super) fn print_config(config: &RosterConfig) {
    for key in RosterConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn print_shell_help() {
    let rows = [
        ("login <user> <password>", "Unlock the form"),
        ("set <field> <value>", "Edit a detail field (id, name, contact, grade)"),
        ("add", "Add the student in the detail fields"),
        ("update", "Save the detail fields over the selected student"),
        ("delete", "Delete the selected student"),
        ("view", "List all students"),
        ("search [keyword]", "Find students by ID or name"),
        ("select <row>", "Select a row of the list"),
        ("pick <student-id>", "Select a student by ID"),
        ("clear", "Empty the fields and drop the selection"),
        ("form", "Show the detail fields"),
        ("quit", "Leave the session"),
    ];
    for (usage, about) in rows {
        println!("  {}{}", pad_to_width(usage, 26).bold(), about);
    }
}

/// Truncate or pad `s` so it occupies exactly `width` terminal columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let budget = width.saturating_sub(1);

    if s.width() > budget {
        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width > budget.saturating_sub(1) {
                result.push('…');
                current_width += 1;
                break;
            }
            result.push(c);
            current_width += char_width;
        }
    } else {
        result.push_str(s);
        current_width = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}
