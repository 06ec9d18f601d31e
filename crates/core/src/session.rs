use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The authenticated user's identity, created at login and threaded
/// explicitly into every authenticated API call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: String,
}

impl Session {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

/// Persistence for the current session, the analogue of the browser's
/// `user`/`token` local-storage keys.
pub trait SessionStore {
    /// Returns the stored session, or `None` when nobody is logged in.
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

/// Session persisted as a JSON file under the platform config directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location, e.g. `~/.config/animeflix/session.json` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("animeflix")
            .join("session.json")
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::SessionStore(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(session).map_err(|e| Error::SessionStore(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| Error::SessionStore(e.to_string()))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::SessionStore(err.to_string())),
        }
    }
}

/// In-memory store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.lock().map(|guard| guard.clone()).unwrap_or(None)
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| Error::SessionStore("session store poisoned".into()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| Error::SessionStore("session store poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}
