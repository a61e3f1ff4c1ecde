//! The session store trait and its implementations.
//!
//! The entire external contract of session persistence is a single key-value
//! entry holding the authenticated user as JSON. The file-backed store is
//! what production runs use; the in-memory store exists for tests and
//! ephemeral runs.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, auth::User};

/// The fixed name of the session entry.
pub const SESSION_FILE_NAME: &str = "edupay_user.json";

/// Reads, writes and clears the single persisted session entry.
///
/// Implementations must distinguish "no entry" (`Ok(None)`) from "entry
/// present but unparseable" ([Error::MalformedSession]) so that the session
/// manager can discard corrupt entries at startup.
pub trait SessionStore {
    /// Read the persisted user, or [None] when no entry exists.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [Error::MalformedSession] if an entry exists but cannot be parsed,
    /// - [Error::SessionStore] if the entry cannot be read at all.
    fn read(&self) -> Result<Option<User>, Error>;

    /// Persist `user` as the session entry, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::SessionStore] if the entry could
    /// not be written.
    fn write(&mut self, user: &User) -> Result<(), Error>;

    /// Remove the session entry. Clearing an absent entry is not an error.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::SessionStore] if the entry exists
    /// but could not be removed.
    fn clear(&mut self) -> Result<(), Error>;
}

/// A [SessionStore] holding one JSON document at a fixed file path.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Create a store that persists the session entry at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store using the default entry name [SESSION_FILE_NAME] inside
    /// `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    /// The path of the session entry.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn read(&self) -> Result<Option<User>, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(Error::SessionStore(error.to_string())),
        };

        match serde_json::from_str(&text) {
            Ok(user) => Ok(Some(user)),
            Err(error) => Err(Error::MalformedSession(error.to_string())),
        }
    }

    fn write(&mut self, user: &User) -> Result<(), Error> {
        let json = serde_json::to_string(user)
            .map_err(|error| Error::SessionStore(error.to_string()))?;

        fs::write(&self.path, json).map_err(|error| Error::SessionStore(error.to_string()))
    }

    fn clear(&mut self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Error::SessionStore(error.to_string())),
        }
    }
}

/// A volatile [SessionStore] backed by an optional in-memory string.
///
/// The entry is held in serialized form so tests can inject malformed
/// content, and writes can be made to fail to exercise the login failure
/// path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entry: Option<String>,
    fail_writes: bool,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose entry already holds `raw` text.
    pub fn with_entry(raw: &str) -> Self {
        Self {
            entry: Some(raw.to_string()),
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail with [Error::SessionStore].
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Whether an entry is currently held.
    pub fn has_entry(&self) -> bool {
        self.entry.is_some()
    }

    /// The raw serialized entry, if any.
    pub fn raw_entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }
}

impl SessionStore for InMemorySessionStore {
    fn read(&self) -> Result<Option<User>, Error> {
        match &self.entry {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(raw) {
                Ok(user) => Ok(Some(user)),
                Err(error) => Err(Error::MalformedSession(error.to_string())),
            },
        }
    }

    fn write(&mut self, user: &User) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::SessionStore(
                "in-memory store is configured to fail writes".to_string(),
            ));
        }

        let json = serde_json::to_string(user)
            .map_err(|error| Error::SessionStore(error.to_string()))?;
        self.entry = Some(json);

        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.entry = None;
        Ok(())
    }
}
