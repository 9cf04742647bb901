//! # Storage Layer
//!
//! The [`BookStore`] trait is the only way an [`AddressBook`] reaches disk.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage, one JSON document at a
//!   configurable path (`filename.json` by default).
//! - [`memory::InMemoryStore`]: Keeps the serialized document in memory.
//!   Used by tests; it goes through the same encoding as the file store.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "Alice": {
//!         "name": "Alice",
//!         "phones": ["1111111111", "2222222222"],
//!         "birthday": "1990-05-17"
//!     },
//!     "Bob": {
//!         "name": "Bob",
//!         "phones": null,
//!         "birthday": null
//!     }
//! }
//! ```
//!
//! Top-level keys keep the book's insertion order. Every phone is written and
//! every phone is read back.

use crate::book::AddressBook;
use crate::error::Result;
use crate::model::StoredRecord;
use indexmap::IndexMap;
use serde::Serialize;

pub mod fs;
pub mod memory;

const INDENT: &[u8] = b"    ";

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Read the whole book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

pub(crate) fn encode(book: &AddressBook) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    book.to_stored().serialize(&mut ser)?;
    Ok(out)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<AddressBook> {
    let stored: IndexMap<String, StoredRecord> = serde_json::from_slice(bytes)?;
    Ok(AddressBook::from_stored(stored))
}
