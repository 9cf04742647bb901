//! # Fields
//!
//! The value holders a [`Record`](crate::model::Record) is built from.
//!
//! Every field implements [`Field`]: a getter that always returns the stored
//! value and a setter that validates before replacing it. Constructors run the
//! same validation as the setter, so a `Phone` or `Birthday` can never exist
//! holding a value that would be rejected on assignment.
//!
//! | Field      | Value       | Rule                          |
//! |------------|-------------|-------------------------------|
//! | `Name`     | `String`    | any string                    |
//! | `Phone`    | `String`    | exactly 10 ASCII digits       |
//! | `Birthday` | `NaiveDate` | a calendar date (`YYYY-MM-DD`) |

use crate::error::{AbookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";
const PHONE_LEN: usize = 10;

/// A single validated value.
pub trait Field {
    type Value;

    fn value(&self) -> &Self::Value;

    /// Replace the stored value. On error the previous value is kept.
    fn set_value(&mut self, value: Self::Value) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }

    fn set_value(&mut self, value: String) -> Result<()> {
        self.0 = value;
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_phone(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_phone(value: &str) -> Result<()> {
    if value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AbookError::InvalidPhone(value.to_string()))
    }
}

impl Field for Phone {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }

    fn set_value(&mut self, value: String) -> Result<()> {
        validate_phone(&value)?;
        self.0 = value;
        Ok(())
    }
}

impl TryFrom<String> for Phone {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Phone::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl FromStr for Phone {
    type Err = AbookError;

    fn from_str(s: &str) -> Result<Self> {
        Phone::new(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `YYYY-MM-DD` date.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| AbookError::InvalidBirthday(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }

    fn set_value(&mut self, value: NaiveDate) -> Result<()> {
        self.0 = value;
        Ok(())
    }
}

impl TryFrom<String> for Birthday {
    type Error = AbookError;

    fn try_from(value: String) -> Result<Self> {
        Birthday::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl FromStr for Birthday {
    type Err = AbookError;

    fn from_str(s: &str) -> Result<Self> {
        Birthday::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
