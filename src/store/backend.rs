use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use crate::error::{ErrorContext, HubError, HubResult};

/// Durable side of the store. Implementations hold raw JSON text per key.
pub trait StorageBackend {
    fn load(&self, key: &str) -> HubResult<Option<String>>;
    fn save(&self, key: &str, raw: &str) -> HubResult<()>;
    fn remove(&self, key: &str) -> HubResult<()>;
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn open(dir: impl Into<PathBuf>) -> HubResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> HubResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, raw: &str) -> HubResult<()> {
        // Write beside the target and rename so a crash never leaves half a document.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(raw.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path_for(key))
            .map_err(|e| HubError::Storage(format!("Failed to persist '{}': {}", key, e)))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> HubResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory backend for tests. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_saves: Arc<AtomicBool>,
    fail_loads: Arc<AtomicBool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, raw: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), raw.to_string());
        }
        self
    }

    /// Raw text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|entries| entries.get(key).cloned())
    }

    /// Make every subsequent save fail, simulating a full or read-only store.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent load fail while the entries stay intact.
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    fn entries(&self) -> HubResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| HubError::Storage("memory backend lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> HubResult<Option<String>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(HubError::Storage(format!("could not read '{}'", key)));
        }
        Ok(self.entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, raw: &str) -> HubResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(HubError::Storage(format!("quota exceeded writing '{}'", key)));
        }
        self.entries()?.insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> HubResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
