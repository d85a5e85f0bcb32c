//! Client-side session state: the bearer token and the signed-in user.
//!
//! The session is an explicit object handed to the HTTP client and the auth
//! service at composition time. It holds at most one token; writes overwrite
//! and the last one wins.

use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::User;
use crate::error::Result;

/// Storage key for the serialized signed-in user.
pub const USER_STORAGE_KEY: &str = "user";

/// Key/value persistence behind a [`Session`].
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store; forgotten on exit.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, surviving restarts.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Map<String, Value>> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Map::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Shared handle over the token slot and the cached user.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    token_key: String,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, token_key: impl Into<String>) -> Self {
        Self {
            store,
            token_key: token_key.into(),
        }
    }

    /// Session kept only in memory.
    pub fn in_memory(token_key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStore::new()), token_key)
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.store.get(&self.token_key)?.filter(|t| !t.is_empty()))
    }

    /// Persist a token, or clear the slot with `None` (an empty token clears too).
    pub fn set_token(&self, token: Option<&str>) -> Result<()> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => self.store.set(&self.token_key, token),
            None => self.store.remove(&self.token_key),
        }
    }

    pub fn user(&self) -> Result<Option<User>> {
        match self.store.get(USER_STORAGE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_user(&self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => self
                .store
                .set(USER_STORAGE_KEY, &serde_json::to_string(user)?),
            None => self.store.remove(USER_STORAGE_KEY),
        }
    }

    /// Forget both the token and the user.
    pub fn clear(&self) -> Result<()> {
        self.set_token(None)?;
        self.set_user(None)
    }
}
