//! Core types for parsed registrations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column labels of the roster, in output order
pub const HEADERS: [&str; 4] = ["Datum", "Ime", "Broj Mobitela", "Email"];

/// One registrant pulled from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Local sent date as `dd.MM.yyyy HH:mm:ss`, or empty when the message had none
    pub date: String,

    /// Registrant name
    pub name: String,

    /// Registrant phone number, as written in the form
    pub phone_number: String,

    /// Registrant email address; the dedup key
    pub email: String,
}

impl Record {
    /// Cell values in the same order as [`HEADERS`]
    #[must_use]
    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.name, &self.phone_number, &self.email]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Records keyed by email address.
///
/// Inserting a record whose email is already present replaces the earlier
/// one. Iteration is ordered by email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    by_email: BTreeMap<String, Record>,
}

impl RecordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.by_email.insert(record.email.clone(), record)
    }

    #[must_use]
    pub fn get(&self, email: &str) -> Option<&Record> {
        self.by_email.get(email)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.by_email.values()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.by_email.into_values().collect()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Record> for RecordSet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
