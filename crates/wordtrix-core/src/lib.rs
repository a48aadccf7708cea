//! WordTrix core: the anagram predicate and the anagram-pair record
//! collection, plus the persistence boundary both front ends share.

pub mod anagram;
pub mod collection;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use anagram::{is_anagram, AnagramOptions};
pub use collection::{AnagramPair, Collection, Confirmation, Entry};
pub use command::{execute, Command, Reply};
pub use config::Config;
pub use error::{CollectionError, CoreError, ErrorKind};
pub use session::{with_session, Session};
pub use store::{JsonFileStore, MemoryStore, Store};
