//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every abook operation, regardless of the UI in front of it.
//!
//! `AbookApi` owns the store and the in-memory [`AddressBook`]:
//! - On [`AbookApi::open`] the whole book is loaded once. A missing book file
//!   is not an error; the book simply starts empty.
//! - Read operations run their command against the in-memory book.
//! - Mutating operations run their command and, when it changed something,
//!   save the whole book back to the store.
//!
//! The API never writes to stdout/stderr and returns structured
//! [`CmdResult`]s, leaving presentation to the caller.
//!
//! ## Generic Over BookStore
//!
//! - Production: `AbookApi<JsonFileStore>`
//! - Testing: `AbookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::{AbookError, Result};
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::{debug, info};

pub struct AbookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    config_dir: PathBuf,
    today: Option<NaiveDate>,
}

impl<S: BookStore> AbookApi<S> {
    pub fn open(store: S, config_dir: PathBuf) -> Result<Self> {
        let book = match store.load() {
            Ok(book) => book,
            Err(AbookError::BookNotFound(path)) => {
                info!(path = %path.display(), "no address book yet, starting empty");
                AddressBook::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            store,
            book,
            config_dir,
            today: None,
        })
    }

    /// Pin the date birthday countdowns are computed from.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn mutate<F>(&mut self, op: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&mut AddressBook) -> Result<commands::CmdResult>,
    {
        let result = op(&mut self.book)?;
        if result.is_mutation() {
            self.book.save(&mut self.store)?;
            debug!(records = self.book.len(), "address book persisted");
        }
        Ok(result)
    }

    pub fn add_contact<P: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[P],
        birthday: Option<&str>,
    ) -> Result<commands::CmdResult> {
        self.mutate(|book| commands::add::run(book, name, phones, birthday))
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        self.mutate(|book| commands::remove::run(book, name))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        self.mutate(|book| commands::phone::add(book, name, phone))
    }

    pub fn delete_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        self.mutate(|book| commands::phone::delete(book, name, phone))
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        self.mutate(|book| commands::phone::edit(book, name, old, new))
    }

    pub fn set_birthday(&mut self, name: &str, date: Option<&str>) -> Result<commands::CmdResult> {
        self.mutate(|book| commands::birthday::set(book, name, date))
    }

    pub fn show_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.book, name, self.today())
    }

    pub fn list_contacts(&self, range: ListRange) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, range, self.today())
    }

    pub fn search(&self, keyword: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, keyword, self.today())
    }

    pub fn upcoming_birthdays(&self, within_days: i64) -> Result<commands::CmdResult> {
        commands::birthday::upcoming(&self.book, self.today(), within_days)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::ListRange;
pub use commands::{CmdMessage, CmdResult, ListedRecord, MessageLevel};
