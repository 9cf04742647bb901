use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(AbookError::Io)
            }
            _ => Ok(()),
        }
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<AddressBook> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AbookError::BookNotFound(self.path.clone()),
            _ => AbookError::Io(e),
        })?;
        let book = decode(&bytes)?;
        debug!(path = %self.path.display(), records = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let bytes = encode(book)?;
        fs::write(&self.path, bytes).map_err(AbookError::Io)?;
        debug!(path = %self.path.display(), records = book.len(), "saved address book");
        Ok(())
    }
}
