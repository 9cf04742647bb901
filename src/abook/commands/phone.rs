use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::Phone;

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let phone = Phone::new(phone)?;
    let record = book.require_mut(name)?;
    record.add_phone(phone.clone());

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Phone {} added to {}",
        phone, name
    )));
    Ok(result)
}

pub fn delete(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let phone = Phone::new(phone)?;
    let record = book.require_mut(name)?;
    let removed = record.delete_phone(&phone)?;

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Phone {} removed from {}",
        removed, name
    )));
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let old = Phone::new(old)?;
    let new = Phone::new(new)?;
    let record = book.require_mut(name)?;
    record.edit_phone(&old, new.clone())?;

    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Phone {} changed to {} for {}",
        old, new, name
    )));
    Ok(result)
}
