//! Front-end contract.
//!
//! The single-shot CLI and the interactive shell both turn user input into a
//! [`Command`] and hand it to [`execute`]; neither touches the collection
//! directly. Rendering the resulting [`Reply`] is up to the front end.

use crate::collection::{Collection, Confirmation, Entry};
use crate::error::CollectionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store the pair if the two subjects are anagrams.
    Check { subject1: String, subject2: String },
    /// Search stored records for anagrams of `query`.
    Match { query: String },
    List,
    /// `position` is raw user text; it is parsed during execution so that
    /// non-numeric input surfaces as a usage error.
    Delete { position: String },
    Clear,
}

impl Command {
    /// Build a `Check` from loose arguments. Fewer than two subjects is a
    /// usage error; extra arguments are ignored.
    pub fn check_from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, CollectionError> {
        match args {
            [subject1, subject2, ..] => Ok(Command::Check {
                subject1: subject1.as_ref().to_string(),
                subject2: subject2.as_ref().to_string(),
            }),
            _ => Err(CollectionError::Usage(
                "check needs two subjects".to_string(),
            )),
        }
    }
}

/// Successful result of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Added(Entry),
    Matches { query: String, hits: Vec<Entry> },
    Listing(Vec<Entry>),
    /// `List` on a collection with no records.
    Empty,
    Deleted(Entry),
    Cleared { removed: usize },
}

/// Run `command` against `collection`.
///
/// `confirm` is only called for [`Command::Clear`].
pub fn execute<F>(
    collection: &mut Collection,
    command: Command,
    confirm: F,
) -> Result<Reply, CollectionError>
where
    F: FnOnce() -> Confirmation,
{
    match command {
        Command::Check { subject1, subject2 } => {
            collection.check(&subject1, &subject2).map(Reply::Added)
        }
        Command::Match { query } => {
            let hits = collection.find_matches(&query);
            if hits.is_empty() {
                Err(CollectionError::NoMatch { query })
            } else {
                Ok(Reply::Matches { query, hits })
            }
        }
        Command::List => {
            if collection.is_empty() {
                Ok(Reply::Empty)
            } else {
                Ok(Reply::Listing(collection.entries()))
            }
        }
        Command::Delete { position } => {
            let position = Collection::parse_position(&position)?;
            collection.delete(position).map(Reply::Deleted)
        }
        Command::Clear => collection
            .clear(confirm())
            .map(|removed| Reply::Cleared { removed }),
    }
}
