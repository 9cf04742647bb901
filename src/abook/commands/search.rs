use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use chrono::NaiveDate;

/// Keyword search over names (substring) and phones (prefix), ignoring case.
/// An empty result is reported as a message, not an error.
pub fn run(book: &AddressBook, keyword: &str, today: NaiveDate) -> Result<CmdResult> {
    let matches: Vec<ListedRecord> = book
        .search(keyword)
        .into_iter()
        .map(|record| ListedRecord::new(record, today))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No results found."));
    }
    Ok(result.with_listed_records(matches))
}
