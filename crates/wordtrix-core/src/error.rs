use std::path::PathBuf;

/// Failures at the persistence and configuration boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed database {}: {source}", file.display())]
    Format {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no per-user data directory available on this platform")]
    NoDataDir,
}

/// Coarse category of a [`CollectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied missing or malformed arguments.
    Usage,
    /// A position was out of range, or nothing matched.
    NotFound,
    /// A destructive operation was not confirmed.
    Aborted,
}

/// Recoverable outcome of a collection operation that did not succeed.
///
/// None of these leave the collection partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("no anagram found on >>{subject1}<< >>{subject2}<<")]
    NotAnagram { subject1: String, subject2: String },

    #[error("invalid row number {position} (collection has {len} rows)")]
    InvalidPosition { position: i64, len: usize },

    #[error("no anagram found in db for >>{query}<<")]
    NoMatch { query: String },

    #[error("clear aborted")]
    Aborted,
}

impl CollectionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::Usage(_) => ErrorKind::Usage,
            CollectionError::NotAnagram { .. }
            | CollectionError::InvalidPosition { .. }
            | CollectionError::NoMatch { .. } => ErrorKind::NotFound,
            CollectionError::Aborted => ErrorKind::Aborted,
        }
    }
}
