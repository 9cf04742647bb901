use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.remove_record(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact removed: {}", name)));
    Ok(result.with_affected_records(vec![removed]))
}
