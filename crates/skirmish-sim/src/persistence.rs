//! Durable currency storage.
//!
//! Two counters, `coins` and `gems`, read once at startup and rewritten
//! with the full total on every pickup. The in-memory value is the source
//! of truth; a failed write is logged by the caller and superseded by the
//! next one.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;

use skirmish_core::enums::CollectibleKind;
use skirmish_core::types::Currency;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on {key}: {source}")]
    Io {
        key: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("malformed {key} counter: {value:?}")]
    Malformed { key: &'static str, value: String },
    #[error("{key} counter was unreadable at load, not overwriting it")]
    Unloaded { key: &'static str },
}

/// Key-value store holding the currency counters.
///
/// Counters load independently, so one bad counter never hides the other.
pub trait CurrencyStore: Send {
    fn load(&mut self, kind: CollectibleKind) -> Result<u64, StorageError>;
    fn store(&mut self, kind: CollectibleKind, total: u64) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same counters, so a test can keep a
/// handle after giving one to the engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryCurrencyStore {
    coins: Arc<AtomicU64>,
    gems: Arc<AtomicU64>,
}

impl MemoryCurrencyStore {
    pub fn new(initial: Currency) -> Self {
        Self {
            coins: Arc::new(AtomicU64::new(initial.coins)),
            gems: Arc::new(AtomicU64::new(initial.gems)),
        }
    }

    pub fn get(&self, kind: CollectibleKind) -> u64 {
        self.counter(kind).load(Ordering::SeqCst)
    }

    fn counter(&self, kind: CollectibleKind) -> &AtomicU64 {
        match kind {
            CollectibleKind::Coin => &self.coins,
            CollectibleKind::Gem => &self.gems,
        }
    }
}

impl CurrencyStore for MemoryCurrencyStore {
    fn load(&mut self, kind: CollectibleKind) -> Result<u64, StorageError> {
        Ok(self.get(kind))
    }

    fn store(&mut self, kind: CollectibleKind, total: u64) -> Result<(), StorageError> {
        self.counter(kind).store(total, Ordering::SeqCst);
        Ok(())
    }
}

/// One file per counter inside `dir`, each holding plain integer text.
///
/// A counter whose file could not be read stays write-protected for the
/// rest of the session, so a session total built on a zero never replaces
/// the value on disk. Writes land in a temp file renamed over the counter.
#[derive(Debug, Clone)]
pub struct FileCurrencyStore {
    dir: PathBuf,
    unreadable: HashSet<CollectibleKind>,
}

impl FileCurrencyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            unreadable: HashSet::new(),
        }
    }

    fn read_counter(&self, kind: CollectibleKind) -> Result<u64, StorageError> {
        let key = kind.storage_key();
        let text = match fs::read_to_string(self.dir.join(key)) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(StorageError::Io { key, source }),
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse().map_err(|_| StorageError::Malformed {
            key,
            value: trimmed.to_string(),
        })
    }
}

impl CurrencyStore for FileCurrencyStore {
    fn load(&mut self, kind: CollectibleKind) -> Result<u64, StorageError> {
        let result = self.read_counter(kind);
        if result.is_err() {
            self.unreadable.insert(kind);
        } else {
            self.unreadable.remove(&kind);
        }
        result
    }

    fn store(&mut self, kind: CollectibleKind, total: u64) -> Result<(), StorageError> {
        let key = kind.storage_key();
        if self.unreadable.contains(&kind) {
            return Err(StorageError::Unloaded { key });
        }
        let io_err = |source| StorageError::Io { key, source };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp, total.to_string()).map_err(io_err)?;
        fs::rename(&tmp, self.dir.join(key)).map_err(io_err)
    }
}
