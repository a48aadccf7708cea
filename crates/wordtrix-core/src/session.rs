//! Session scope: load once at the start, save once at the end.
//!
//! Saving is an explicit [`Session::close`] call rather than a `Drop` side
//! effect, so write errors reach the caller.

use tracing::debug;

use crate::collection::Collection;
use crate::error::CoreError;
use crate::store::Store;

pub struct Session<S: Store> {
    store: S,
    collection: Collection,
}

impl<S: Store> Session<S> {
    pub fn open(store: S) -> Result<Self, CoreError> {
        let collection = Collection::from_records(store.load()?);
        debug!(records = collection.len(), "session opened");
        Ok(Self { store, collection })
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    /// Persist the collection and hand the store back.
    pub fn close(mut self) -> Result<S, CoreError> {
        self.store.save(self.collection.records())?;
        debug!(records = self.collection.len(), "session closed");
        Ok(self.store)
    }
}

/// Open a session on `store`, run `f` against its collection, then save.
///
/// The collection is saved whatever `f` returns; only a load or save failure
/// produces an `Err`.
pub fn with_session<S, T, F>(store: S, f: F) -> Result<T, CoreError>
where
    S: Store,
    F: FnOnce(&mut Collection) -> T,
{
    let mut session = Session::open(store)?;
    let out = f(session.collection_mut());
    session.close()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::AnagramPair;
    use crate::store::MemoryStore;

    #[test]
    fn changes_are_saved_on_close() {
        let store = MemoryStore::new(vec![AnagramPair::new("stop", "pots")]);
        let mut session = Session::open(store).unwrap();
        session.collection_mut().check("listen", "silent").unwrap();
        session.collection_mut().delete(1).unwrap();

        let store = session.close().unwrap();
        assert_eq!(store.records(), &[AnagramPair::new("listen", "silent")]);
    }

    #[test]
    fn nothing_saved_before_close() {
        let mut store = MemoryStore::default();
        {
            let mut session = Session::open(&mut store).unwrap();
            session.collection_mut().check("stop", "pots").unwrap();
        }
        assert!(store.records().is_empty());
    }

    #[test]
    fn with_session_saves_even_after_failed_operation() {
        let mut store = MemoryStore::default();
        let result = with_session(&mut store, |c| {
            c.check("stop", "pots").unwrap();
            c.delete(7)
        })
        .unwrap();
        assert!(result.is_err());
        assert_eq!(store.records(), &[AnagramPair::new("stop", "pots")]);
    }
}
