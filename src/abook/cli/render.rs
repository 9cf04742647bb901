//! Terminal output. `render_*` functions build the text, `print_*` write it.

use abook::api::{CmdMessage, ListedRecord, MessageLevel};
use abook::config::{AbookConfig, ConfigKey};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NO_PHONES: &str = "-";

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

/// One line per contact: name column padded to the widest name, then phones
/// and the birthday countdown.
pub(super) fn render_record_list(records: &[ListedRecord]) -> String {
    let name_width = records
        .iter()
        .map(|l| l.record.key().width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for listed in records {
        let name = listed.record.key();
        let padding = " ".repeat(name_width - name.width());
        out.push_str(&format!(
            "{}{}  {}",
            name.bold(),
            padding,
            phone_list(listed)
        ));
        if let Some(birthday) = listed.record.birthday() {
            out.push_str(&format!(
                "  {} {}",
                birthday,
                countdown(listed.days_to_birthday).dimmed()
            ));
        }
        out.push('\n');
    }
    out
}

/// The search report: a header, then Name / Phone / Birthday lines per match.
pub(super) fn render_search_results(records: &[ListedRecord]) -> String {
    let mut out = String::from("Search results:\n");
    for listed in records {
        out.push_str(&render_card(listed));
    }
    out
}

pub(super) fn render_card(listed: &ListedRecord) -> String {
    let mut out = format!("Name: {}\n", listed.record.key().bold());
    for phone in listed.record.phones() {
        out.push_str(&format!("Phone: {}\n", phone));
    }
    if let Some(birthday) = listed.record.birthday() {
        out.push_str(&format!(
            "Birthday: {} {}\n",
            birthday,
            countdown(listed.days_to_birthday).dimmed()
        ));
    }
    out
}

pub(super) fn render_upcoming(records: &[ListedRecord]) -> String {
    let mut out = String::new();
    for listed in records {
        let when = match listed.days_to_birthday {
            Some(0) => "today".to_string(),
            Some(1) => "tomorrow".to_string(),
            Some(n) => format!("in {} days", n),
            None => continue,
        };
        let date = listed
            .record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_default();
        out.push_str(&format!("{:<12} {}  {}\n", when, listed.record.key().bold(), date));
    }
    out
}

pub(super) fn render_config(config: &AbookConfig) -> String {
    ConfigKey::all()
        .iter()
        .map(|key| format!("{} = {}\n", key.name(), config.get(*key)))
        .collect()
}

fn phone_list(listed: &ListedRecord) -> String {
    if listed.record.phones().is_empty() {
        NO_PHONES.to_string()
    } else {
        listed
            .record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn countdown(days: Option<i64>) -> String {
    match days {
        Some(0) => "(today!)".to_string(),
        Some(1) => "(in 1 day)".to_string(),
        Some(n) => format!("(in {} days)", n),
        None => String::new(),
    }
}
