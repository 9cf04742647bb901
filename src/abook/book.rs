//! # Address Book
//!
//! [`AddressBook`] is an insertion-ordered map from a contact's name to its
//! [`Record`]. Names are unique: adding a record under an existing name
//! replaces the old record but keeps its position in iteration order.
//!
//! Persistence goes through a [`BookStore`]; the book itself never touches the
//! filesystem. Everything else here (iteration, paging, search) is read-only.

use crate::error::{AbookError, Result};
use crate::model::{Record, StoredRecord};
use crate::store::BookStore;
use chrono::NaiveDate;
use indexmap::map::Values;
use indexmap::IndexMap;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.key().to_string(), record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub(crate) fn require_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
    }

    /// Remove a record, preserving the order of the remaining ones.
    pub fn remove_record(&mut self, name: &str) -> Result<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Up to `n` records in insertion order.
    pub fn iterator(&self, n: usize) -> Batch<'_> {
        Batch {
            inner: self.records.values(),
            remaining: n,
        }
    }

    /// Consecutive pages of `size` records. A size of 0 yields no pages.
    pub fn pages(&self, size: usize) -> Pages<'_> {
        Pages {
            inner: self.records.values(),
            size,
        }
    }

    /// Records whose name contains `keyword`, or that have a phone starting
    /// with `keyword`. Both comparisons ignore case.
    pub fn search(&self, keyword: &str) -> Vec<&Record> {
        let needle = keyword.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().to_lowercase().starts_with(&needle))
            })
            .collect()
    }

    /// Records whose next birthday falls within `within_days` of `today`,
    /// soonest first. Ties are ordered by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .values()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();

        upcoming.sort_by(|(a, days_a), (b, days_b)| {
            days_a.cmp(days_b).then_with(|| a.key().cmp(b.key()))
        });
        upcoming
    }

    /// Write the whole book to `store`, replacing what it held.
    pub fn save<S: BookStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.save(self)
    }

    /// Replace the in-memory records with the contents of `store`.
    pub fn load<S: BookStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        *self = store.load()?;
        Ok(())
    }

    pub fn to_stored(&self) -> IndexMap<String, StoredRecord> {
        self.records
            .iter()
            .map(|(name, record)| (name.clone(), record.to_stored()))
            .collect()
    }

    /// Rebuild a book from its stored form. Records are keyed by their own
    /// `name`, not the document key.
    pub fn from_stored(stored: IndexMap<String, StoredRecord>) -> Self {
        let mut book = Self::new();
        for (_, record) in stored {
            book.add_record(record.into());
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Bounded iterator returned by [`AddressBook::iterator`].
pub struct Batch<'a> {
    inner: Values<'a, String, Record>,
    remaining: usize,
}

impl<'a> Iterator for Batch<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.inner.next() {
            Some(record) => {
                self.remaining -= 1;
                Some(record)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.inner.len().min(self.remaining);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Batch<'_> {}
impl FusedIterator for Batch<'_> {}

/// Page iterator returned by [`AddressBook::pages`].
pub struct Pages<'a> {
    inner: Values<'a, String, Record>,
    size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 {
            return None;
        }
        let page: Vec<&Record> = self.inner.by_ref().take(self.size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}

impl FusedIterator for Pages<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Birthday, Name, Phone};
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::InMemoryStore;

    fn contact(name: &str, phone: &str) -> Record {
        Record::new(Name::new(name)).with_phone(Phone::new(phone).unwrap())
    }

    fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<&'a str> {
        records.into_iter().map(|r| r.key()).collect()
    }

    fn alice_and_bob() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(contact("Alice", "1111111111"));
        book.add_record(contact("Bob", "2222222222"));
        book
    }

    #[test]
    fn add_record_overwrites_same_name_in_place() {
        let mut book = alice_and_bob();
        let replaced = book.add_record(contact("Alice", "3333333333"));

        assert!(replaced.is_some());
        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["Alice", "Bob"]);
        assert_eq!(
            book.get("Alice").unwrap().phones()[0].as_str(),
            "3333333333"
        );
    }

    #[test]
    fn remove_record_keeps_order() {
        let mut book = BookFixture::new().with_contacts(4).book;
        book.remove_record("Contact 2").unwrap();
        assert_eq!(names(&book), vec!["Contact 1", "Contact 3", "Contact 4"]);

        let err = book.remove_record("Contact 2").unwrap_err();
        assert!(matches!(err, AbookError::ContactNotFound(_)));
    }

    #[test]
    fn iterator_is_bounded_and_fused() {
        let book = BookFixture::new().with_contacts(3).book;
        let mut it = book.iterator(2);
        assert_eq!(it.len(), 2);
        assert_eq!(it.next().unwrap().key(), "Contact 1");
        assert_eq!(it.next().unwrap().key(), "Contact 2");
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn iterator_stops_early_on_small_book() {
        let book = BookFixture::new().with_contacts(2).book;
        assert_eq!(book.iterator(5).count(), 2);
        assert_eq!(book.iterator(0).count(), 0);
    }

    #[test]
    fn pages_cover_every_record_once() {
        let book = BookFixture::new().with_contacts(5).book;
        let pages: Vec<Vec<&str>> = book.pages(2).map(names).collect();
        assert_eq!(
            pages,
            vec![
                vec!["Contact 1", "Contact 2"],
                vec!["Contact 3", "Contact 4"],
                vec!["Contact 5"],
            ]
        );
        assert_eq!(book.pages(0).count(), 0);
    }

    #[test]
    fn search_matches_name_substring_case_insensitively() {
        let book = alice_and_bob();
        assert_eq!(names(book.search("ali")), vec!["Alice"]);
        assert_eq!(names(book.search("LIC")), vec!["Alice"]);
    }

    #[test]
    fn search_matches_phone_prefix_only() {
        let book = alice_and_bob();
        assert_eq!(names(book.search("222")), vec!["Bob"]);
        assert!(book.search("3").is_empty());

        let mut book = AddressBook::new();
        book.add_record(contact("Carol", "0123456789"));
        // Present in the number, but not at the start.
        assert!(book.search("456").is_empty());
        assert_eq!(names(book.search("0123")), vec!["Carol"]);
    }

    #[test]
    fn search_checks_every_phone() {
        let mut book = AddressBook::new();
        book.add_record(
            contact("Dave", "1111111111").with_phone(Phone::new("5550001111").unwrap()),
        );
        assert_eq!(names(book.search("555")), vec!["Dave"]);
    }

    #[test]
    fn empty_keyword_matches_everything() {
        let book = alice_and_bob();
        assert_eq!(book.search("").len(), 2);
    }

    #[test]
    fn upcoming_birthdays_sorted_by_days() {
        let mut book = AddressBook::new();
        let bday = |s: &str| Birthday::parse(s).unwrap();
        book.add_record(Record::new(Name::new("Zed")).with_birthday(bday("1980-03-10")));
        book.add_record(Record::new(Name::new("Amy")).with_birthday(bday("1992-03-10")));
        book.add_record(Record::new(Name::new("Max")).with_birthday(bday("1975-03-02")));
        book.add_record(Record::new(Name::new("Far")).with_birthday(bday("1975-09-01")));
        book.add_record(Record::new(Name::new("None")));

        let today = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        let upcoming: Vec<(&str, i64)> = book
            .upcoming_birthdays(today, 30)
            .into_iter()
            .map(|(r, d)| (r.key(), d))
            .collect();
        assert_eq!(upcoming, vec![("Max", 1), ("Amy", 9), ("Zed", 9)]);
    }

    #[test]
    fn save_then_load_keeps_every_phone() {
        let mut store = InMemoryStore::new();
        let mut book = AddressBook::new();
        book.add_record(
            contact("Alice", "1111111111")
                .with_phone(Phone::new("2222222222").unwrap())
                .with_birthday(Birthday::parse("1990-05-17").unwrap()),
        );
        book.save(&mut store).unwrap();

        let mut loaded = alice_and_bob();
        loaded.load(&store).unwrap();

        let alice = loaded.get("Alice").unwrap();
        let phones: Vec<&str> = alice.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222"]);
        assert_eq!(alice.birthday().unwrap().to_string(), "1990-05-17");
        // Loading replaces the whole mapping.
        assert!(loaded.get("Bob").is_none());
        assert_eq!(loaded, book);
    }

    #[test]
    fn load_from_empty_store_is_not_found() {
        let store = InMemoryStore::new();
        let mut book = alice_and_bob();
        let err = book.load(&store).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn from_stored_keys_by_record_name() {
        let mut stored = IndexMap::new();
        stored.insert(
            "stale key".to_string(),
            StoredRecord {
                name: "Alice".to_string(),
                phones: None,
                birthday: None,
            },
        );
        let book = AddressBook::from_stored(stored);
        assert!(book.get("Alice").is_some());
        assert!(book.get("stale key").is_none());
    }
}
