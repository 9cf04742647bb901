use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data, but encodes exactly like the file store.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved document, as text.
    pub fn document(&self) -> Option<String> {
        self.document
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.document {
            Some(bytes) => decode(bytes),
            None => Err(AbookError::BookNotFound(PathBuf::from("<memory>"))),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.document = Some(encode(book)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::{Birthday, Name, Phone};
    use crate::model::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds "Contact 1".."Contact N", each with one distinct phone.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let phone = format!("{:010}", 5_550_000_000u64 + i as u64 + 1);
                let record = Record::new(Name::new(format!("Contact {}", i + 1)))
                    .with_phone(Phone::new(phone).unwrap());
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str], birthday: Option<&str>) -> Self {
            let mut record = Record::new(Name::new(name));
            for phone in phones {
                record.add_phone(Phone::new(*phone).unwrap());
            }
            if let Some(date) = birthday {
                record = record.with_birthday(Birthday::parse(date).unwrap());
            }
            self.book.add_record(record);
            self
        }

        /// A store already holding the fixture's book.
        pub fn into_store(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store.save(&self.book).unwrap();
            store
        }
    }
}
