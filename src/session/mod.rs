//! Session Persistence
//!
//! A session store holds one serialized [`User`] record under
//! [`SESSION_KEY`]. It is read at startup, written at login and removed at
//! logout.

#[cfg(feature = "native")]
mod file;

#[cfg(feature = "native")]
pub use file::FileSessionStore;

use std::cell::RefCell;

use crate::error::SessionError;
use crate::models::User;

/// Key under which the logged-in user is stored
pub const SESSION_KEY: &str = "loggedBlogListAppUser";

/// Backend holding the persisted session record
pub trait SessionStore {
    /// Read the raw record, if any
    fn read(&self) -> Result<Option<String>, SessionError>;

    /// Replace the raw record
    fn write(&self, record: &str) -> Result<(), SessionError>;

    /// Remove the record; removing a missing record is not an error
    fn remove(&self) -> Result<(), SessionError>;

    /// Load and deserialize the stored user
    fn load(&self) -> Result<Option<User>, SessionError> {
        match self.read()? {
            Some(record) => Ok(Some(serde_json::from_str(&record)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store the user
    fn save(&self, user: &User) -> Result<(), SessionError> {
        let record = serde_json::to_string(user)?;
        self.write(&record)
    }
}

/// In-memory store, for tests and hosts without persistent storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw record already stored
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: RefCell::new(Some(record.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<String>, SessionError> {
        Ok(self.record.borrow().clone())
    }

    fn write(&self, record: &str) -> Result<(), SessionError> {
        *self.record.borrow_mut() = Some(record.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionError> {
        self.record.borrow_mut().take();
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn read(&self) -> Result<Option<String>, SessionError> {
        (**self).read()
    }

    fn write(&self, record: &str) -> Result<(), SessionError> {
        (**self).write(record)
    }

    fn remove(&self) -> Result<(), SessionError> {
        (**self).remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            username: "root".to_string(),
            name: "Superuser".to_string(),
            id: "u1".to_string(),
            token: "t0k3n".to_string(),
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&user()).unwrap();
        assert_eq!(store.load().unwrap(), Some(user()));

        store.remove().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_record() {
        let store = MemorySessionStore::with_record("{not json");
        assert!(matches!(store.load(), Err(SessionError::Corrupt(_))));
    }

    #[test]
    fn test_remove_missing_record() {
        let store = MemorySessionStore::new();
        assert!(store.remove().is_ok());
    }
}
