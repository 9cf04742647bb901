//! # Command Layer
//!
//! One module per user-facing operation. Commands take the in-memory
//! [`AddressBook`](crate::book::AddressBook) plus plain arguments and return a
//! [`CmdResult`]; they never touch the store or the terminal. Loading and
//! saving is the API layer's job.
//!
//! Raw strings from the caller are validated here, before anything is
//! mutated, so a failed command leaves the book unchanged.

use crate::config::AbookConfig;
use crate::model::Record;
use chrono::NaiveDate;

pub mod add;
pub mod birthday;
pub mod config;
pub mod list;
pub mod phone;
pub mod remove;
pub mod search;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record as shown to the user, with its birthday countdown resolved
/// against the day the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRecord {
    pub record: Record,
    pub days_to_birthday: Option<i64>,
}

impl ListedRecord {
    pub fn new(record: &Record, today: NaiveDate) -> Self {
        Self {
            record: record.clone(),
            days_to_birthday: record.days_to_birthday_from(today),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<ListedRecord>,
    pub config: Option<AbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: AbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether the command changed the book and it needs saving.
    pub fn is_mutation(&self) -> bool {
        !self.affected_records.is_empty()
    }
}
