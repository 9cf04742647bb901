use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRange {
    /// One-based page number of `size` records.
    Page { number: usize, size: usize },
    /// The first `n` records.
    First(usize),
}

pub fn run(book: &AddressBook, range: ListRange, today: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::info("Address book is empty."));
        return Ok(result);
    }

    let records: Vec<ListedRecord> = match range {
        ListRange::First(n) => book
            .iterator(n)
            .map(|record| ListedRecord::new(record, today))
            .collect(),
        ListRange::Page { number, size } => {
            let size = size.max(1);
            let total = book.len().div_ceil(size);
            let page = book
                .pages(size)
                .nth(number.saturating_sub(1))
                .unwrap_or_default();
            if page.is_empty() {
                result.add_message(CmdMessage::warning(format!(
                    "Page {} is past the end ({} pages).",
                    number, total
                )));
            } else if total > 1 {
                result.add_message(CmdMessage::info(format!(
                    "Page {} of {}",
                    number.max(1),
                    total
                )));
            }
            page.into_iter()
                .map(|record| ListedRecord::new(record, today))
                .collect()
        }
    };

    Ok(result.with_listed_records(records))
}
