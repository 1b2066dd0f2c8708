//! Book resource types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Date format used for publication dates on the wire and in storage
pub const BOOK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of publication, always `YYYY-MM-DD` when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookDate(pub NaiveDate);

impl BookDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Publication date that is not a zero-padded `YYYY-MM-DD` calendar date
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date {0:?}, expected YYYY-MM-DD")]
pub struct BookDateError(String);

impl FromStr for BookDate {
    type Err = BookDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts `2020-1-1`; stored dates are compared as padded text
        let date = NaiveDate::parse_from_str(s, BOOK_DATE_FORMAT)
            .map_err(|_| BookDateError(s.to_string()))?;
        if date.format(BOOK_DATE_FORMAT).to_string() != s {
            return Err(BookDateError(s.to_string()));
        }
        Ok(Self(date))
    }
}

impl fmt::Display for BookDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BOOK_DATE_FORMAT))
    }
}

impl Serialize for BookDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BookDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Author must be at most 255 characters"))]
    pub author: String,

    /// Unique identifier of the book
    #[validate(length(min = 1, max = 32, message = "ISBN must be 1-32 characters"))]
    pub isbn: String,

    #[schema(value_type = String, format = Date, example = "1603-01-01")]
    pub published_date: BookDate,

    #[serde(default)]
    pub edition: u8,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub genre: String,
}

impl Book {
    /// Human readable summary used in write confirmations
    pub fn summary(&self) -> String {
        format!(
            "{} written by {} with ISBN: {}",
            self.title, self.author, self.isbn
        )
    }
}
