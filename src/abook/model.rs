use crate::error::{AbookError, Result};
use crate::fields::{Birthday, Field, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One contact: a name, zero or more phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phones.push(phone);
        self
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The key this record is stored under in an address book.
    pub fn key(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    pub fn delete_phone(&mut self, phone: &Phone) -> Result<Phone> {
        let idx = self.position_of(phone)?;
        Ok(self.phones.remove(idx))
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> Result<()> {
        let idx = self.position_of(old)?;
        self.phones[idx] = new;
        Ok(())
    }

    fn position_of(&self, phone: &Phone) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| AbookError::PhoneNotFound(phone.to_string()))
    }

    /// Days from today (local date) until the next birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.next_birthday_from(today)
            .map(|next| (next - today).num_days())
    }

    /// The next occurrence of the birthday on or after `today`.
    ///
    /// Feb 29 birthdays are observed on Feb 28 in non-leap years.
    pub fn next_birthday_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        let born = self.birthday?.date();
        let this_year = occurrence_in(born, today.year())?;
        if this_year < today {
            occurrence_in(born, today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// The persisted projection of this record.
    pub fn to_stored(&self) -> StoredRecord {
        StoredRecord {
            name: self.name.value().clone(),
            phones: if self.phones.is_empty() {
                None
            } else {
                Some(self.phones.clone())
            },
            birthday: self.birthday,
        }
    }
}

fn occurrence_in(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Shape of a record inside the JSON document.
///
/// `phones` is `null` when the record has none; `birthday` is `YYYY-MM-DD` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub name: String,
    pub phones: Option<Vec<Phone>>,
    pub birthday: Option<Birthday>,
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        Self {
            name: Name::new(stored.name),
            phones: stored.phones.unwrap_or_default(),
            birthday: stored.birthday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(y: i32, m: u32, d: u32) -> Record {
        Record::new(Name::new("Alice")).with_birthday(Birthday::new(date(y, m, d)))
    }

    #[test]
    fn new_record_has_no_phones() {
        let record = Record::new(Name::new("Alice"));
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert_eq!(record.key(), "Alice");
    }

    #[test]
    fn add_phone_allows_duplicates() {
        let mut record = Record::new(Name::new("Alice"));
        record.add_phone(phone("1111111111"));
        record.add_phone(phone("1111111111"));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new(Name::new("Alice")).with_phone(phone("1111111111"));
        record
            .edit_phone(&phone("1111111111"), phone("2222222222"))
            .unwrap();
        assert_eq!(record.phones(), &[phone("2222222222")]);
    }

    #[test]
    fn edit_phone_only_touches_first_match() {
        let mut record = Record::new(Name::new("Alice"))
            .with_phone(phone("1111111111"))
            .with_phone(phone("3333333333"))
            .with_phone(phone("1111111111"));
        record
            .edit_phone(&phone("1111111111"), phone("2222222222"))
            .unwrap();
        assert_eq!(
            record.phones(),
            &[phone("2222222222"), phone("3333333333"), phone("1111111111")]
        );
    }

    #[test]
    fn edit_missing_phone_is_not_found() {
        let mut record = Record::new(Name::new("Alice")).with_phone(phone("1111111111"));
        let err = record
            .edit_phone(&phone("9999999999"), phone("2222222222"))
            .unwrap_err();
        assert!(matches!(err, AbookError::PhoneNotFound(_)));
        assert_eq!(record.phones(), &[phone("1111111111")]);
    }

    #[test]
    fn delete_phone_removes_first_match() {
        let mut record = Record::new(Name::new("Alice"))
            .with_phone(phone("1111111111"))
            .with_phone(phone("2222222222"))
            .with_phone(phone("1111111111"));
        let removed = record.delete_phone(&phone("1111111111")).unwrap();
        assert_eq!(removed, phone("1111111111"));
        assert_eq!(
            record.phones(),
            &[phone("2222222222"), phone("1111111111")]
        );
    }

    #[test]
    fn delete_absent_phone_is_not_found() {
        let mut record = Record::new(Name::new("Alice"));
        let err = record.delete_phone(&phone("1111111111")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn days_to_birthday_without_birthday_is_none() {
        let record = Record::new(Name::new("Alice"));
        assert_eq!(record.days_to_birthday_from(date(2024, 1, 1)), None);
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn days_to_birthday_later_this_year() {
        let record = with_birthday(1990, 5, 17);
        assert_eq!(record.days_to_birthday_from(date(2023, 5, 1)), Some(16));
    }

    #[test]
    fn days_to_birthday_already_passed_uses_next_year() {
        let record = with_birthday(1990, 5, 17);
        // 2023-05-18 -> 2024-05-17 spans Feb 29 2024.
        assert_eq!(record.days_to_birthday_from(date(2023, 5, 18)), Some(365));
        assert_eq!(record.days_to_birthday_from(date(2023, 12, 31)), Some(138));
    }

    #[test]
    fn days_to_birthday_today_is_zero() {
        let record = with_birthday(1990, 5, 17);
        assert_eq!(record.days_to_birthday_from(date(2023, 5, 17)), Some(0));
    }

    #[test]
    fn leap_day_birthday_observed_on_feb_28() {
        let record = with_birthday(2000, 2, 29);
        assert_eq!(
            record.next_birthday_from(date(2023, 2, 1)),
            Some(date(2023, 2, 28))
        );
        assert_eq!(record.days_to_birthday_from(date(2023, 2, 28)), Some(0));
        assert_eq!(
            record.next_birthday_from(date(2023, 3, 1)),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn days_to_birthday_uses_local_today() {
        let today = Local::now().date_naive();
        let record = Record::new(Name::new("Alice")).with_birthday(Birthday::new(today));
        assert_eq!(record.days_to_birthday(), Some(0));
    }

    #[test]
    fn stored_projection_uses_null_for_empty_fields() {
        let record = Record::new(Name::new("Bob"));
        let json = serde_json::to_value(record.to_stored()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Bob", "phones": null, "birthday": null })
        );
    }

    #[test]
    fn stored_projection_lists_all_phones() {
        let record = with_birthday(1990, 5, 17)
            .with_phone(phone("1111111111"))
            .with_phone(phone("2222222222"));
        let json = serde_json::to_value(record.to_stored()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alice",
                "phones": ["1111111111", "2222222222"],
                "birthday": "1990-05-17"
            })
        );
        let back: Record = serde_json::from_value::<StoredRecord>(json).unwrap().into();
        assert_eq!(back, record);
    }
}
