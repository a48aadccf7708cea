//! The anagram-pair record collection.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::anagram::AnagramOptions;
use crate::error::CollectionError;

/// A stored pair of subjects that were anagrams when inserted.
///
/// Serialized as `{ "subject1": "...", "subject2": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramPair {
    pub subject1: String,
    pub subject2: String,
}

impl AnagramPair {
    pub fn new(subject1: impl Into<String>, subject2: impl Into<String>) -> Self {
        Self {
            subject1: subject1.into(),
            subject2: subject2.into(),
        }
    }
}

/// A record together with its 1-based position in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub position: usize,
    pub pair: AnagramPair,
}

/// The caller's answer to a destructive-operation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl Confirmation {
    /// `y` in any case is affirmative, and so is `yes`, which the
    /// `(y/n)` prompt does not advertise. Everything else is not.
    pub fn from_response(response: &str) -> Self {
        match response.trim().to_lowercase().as_str() {
            "y" | "yes" => Confirmation::Yes,
            _ => Confirmation::No,
        }
    }
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Yes
        } else {
            Confirmation::No
        }
    }
}

/// Ordered list of anagram pairs, in insertion order.
///
/// Duplicates are allowed. Stored records are never re-validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    records: Vec<AnagramPair>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AnagramPair>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AnagramPair] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AnagramPair> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&AnagramPair> {
        position.checked_sub(1).and_then(|idx| self.records.get(idx))
    }

    /// Append `subject1`/`subject2` if they are anagrams (case-insensitive).
    ///
    /// Subjects are stored as given, without normalization.
    pub fn check(&mut self, subject1: &str, subject2: &str) -> Result<Entry, CollectionError> {
        if !AnagramOptions::default().is_anagram(subject1, subject2) {
            debug!(subject1, subject2, "not an anagram");
            return Err(CollectionError::NotAnagram {
                subject1: subject1.to_string(),
                subject2: subject2.to_string(),
            });
        }

        let pair = AnagramPair::new(subject1, subject2);
        self.records.push(pair.clone());
        let position = self.records.len();
        info!(position, subject1, subject2, "record added");
        Ok(Entry { position, pair })
    }

    /// Every record whose `subject1` is an anagram of `query`, in ascending
    /// position order. Empty when nothing matches.
    pub fn find_matches(&self, query: &str) -> Vec<Entry> {
        let options = AnagramOptions::default();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, pair)| options.is_anagram(query, &pair.subject1))
            .map(|(idx, pair)| Entry {
                position: idx + 1,
                pair: pair.clone(),
            })
            .collect()
    }

    /// All records with their 1-based positions.
    pub fn entries(&self) -> Vec<Entry> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, pair)| Entry {
                position: idx + 1,
                pair: pair.clone(),
            })
            .collect()
    }

    /// Remove the record at a 1-based position. Later records shift down.
    pub fn delete(&mut self, position: i64) -> Result<Entry, CollectionError> {
        let len = self.records.len();
        let idx = usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .filter(|&idx| idx < len)
            .ok_or(CollectionError::InvalidPosition { position, len })?;

        let pair = self.records.remove(idx);
        info!(position, subject1 = %pair.subject1, subject2 = %pair.subject2, "record deleted");
        Ok(Entry {
            position: idx + 1,
            pair,
        })
    }

    /// Parse a user-supplied row number. Range checking is left to
    /// [`Collection::delete`].
    ///
    /// Numbers too large for `i64` saturate, so they still come back from
    /// `delete` as out of range rather than as a usage error.
    pub fn parse_position(arg: &str) -> Result<i64, CollectionError> {
        match arg.trim().parse::<i64>() {
            Ok(position) => Ok(position),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(CollectionError::Usage(format!("{arg:?} is not a row number"))),
            },
        }
    }

    /// Remove every record, but only when `confirmation` is affirmative.
    /// Returns how many records were removed.
    pub fn clear(&mut self, confirmation: Confirmation) -> Result<usize, CollectionError> {
        if confirmation != Confirmation::Yes {
            debug!("clear not confirmed");
            return Err(CollectionError::Aborted);
        }
        let removed = self.records.len();
        self.records.clear();
        info!(removed, "collection cleared");
        Ok(removed)
    }
}
