use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ListedRecord};
use crate::error::Result;
use crate::fields::Birthday;
use chrono::NaiveDate;

/// Set or clear (`None`) a contact's birthday.
pub fn set(book: &mut AddressBook, name: &str, date: Option<&str>) -> Result<CmdResult> {
    let birthday = date.map(Birthday::parse).transpose()?;
    let record = book.require_mut(name)?;
    record.set_birthday(birthday);

    let message = match birthday {
        Some(b) => format!("Birthday of {} set to {}", name, b),
        None => format!("Birthday of {} cleared", name),
    };
    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

/// Contacts with a birthday in the next `within_days` days, soonest first.
pub fn upcoming(book: &AddressBook, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
    let listed: Vec<ListedRecord> = book
        .upcoming_birthdays(today, within_days)
        .into_iter()
        .map(|(record, days)| ListedRecord {
            record: record.clone(),
            days_to_birthday: Some(days),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} days.",
            within_days
        )));
    }
    Ok(result.with_listed_records(listed))
}
