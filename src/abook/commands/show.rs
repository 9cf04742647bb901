use crate::book::AddressBook;
use crate::commands::{CmdResult, ListedRecord};
use crate::error::{AbookError, Result};
use chrono::NaiveDate;

pub fn run(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book
        .get(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_listed_records(vec![ListedRecord::new(record, today)]))
}
