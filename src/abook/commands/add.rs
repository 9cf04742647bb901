use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{Birthday, Name, Phone};
use crate::model::Record;

/// Create a contact. An existing contact with the same name is replaced.
pub fn run<P: AsRef<str>>(
    book: &mut AddressBook,
    name: &str,
    phones: &[P],
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let phones = phones
        .iter()
        .map(|p| Phone::new(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let birthday = birthday.map(Birthday::parse).transpose()?;

    let mut record = Record::new(Name::new(name));
    for phone in phones {
        record.add_phone(phone);
    }
    record.set_birthday(birthday);

    let mut result = CmdResult::default();
    if book.add_record(record.clone()).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Replaced existing contact: {}",
            name
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Contact added: {}", name)));
    }

    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbookError;

    #[test]
    fn adds_contact_with_phones_and_birthday() {
        let mut book = AddressBook::new();
        let result = run(
            &mut book,
            "Alice",
            &["1111111111", "2222222222"],
            Some("1990-05-17"),
        )
        .unwrap();

        assert_eq!(result.affected_records.len(), 1);
        let alice = book.get("Alice").unwrap();
        assert_eq!(alice.phones().len(), 2);
        assert_eq!(alice.birthday().unwrap().to_string(), "1990-05-17");
    }

    #[test]
    fn adds_contact_without_phones() {
        let mut book = AddressBook::new();
        run::<&str>(&mut book, "Bob", &[], None).unwrap();
        assert!(book.get("Bob").unwrap().phones().is_empty());
    }

    #[test]
    fn replacing_warns() {
        let mut book = AddressBook::new();
        run(&mut book, "Alice", &["1111111111"], None).unwrap();
        let result = run(&mut book, "Alice", &["2222222222"], None).unwrap();

        assert!(result.messages[0].content.contains("Replaced"));
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.get("Alice").unwrap().phones()[0].as_str(),
            "2222222222"
        );
    }

    #[test]
    fn invalid_input_leaves_book_untouched() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "Alice", &["1111111111", "12345"], None).unwrap_err();
        assert!(matches!(err, AbookError::InvalidPhone(_)));

        let err = run(&mut book, "Alice", &["1111111111"], Some("May 17")).unwrap_err();
        assert!(matches!(err, AbookError::InvalidBirthday(_)));

        assert!(book.is_empty());
    }
}
