//! Persistent wardrobe of saved looks.
//!
//! A saved look snapshots the current image under a user-chosen name and
//! slot binding. The list is loaded once at startup and written through
//! on every mutation; a failed write is a warning, not an error — the
//! in-memory list stays authoritative for the session.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::types::ImageState;

/// A user-named snapshot bound to an editor slot (e.g. "top").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLook {
    pub id: String,
    pub name: String,
    pub slot_id: String,
    pub image: ImageState,
    pub created_at: String,
}

/// Key-value persistence boundary for the wardrobe list.
pub trait LookStore: Send + Sync {
    fn load(&self) -> Result<Vec<SavedLook>>;
    fn save(&self, looks: &[SavedLook]) -> Result<()>;
}

/// Stores the wardrobe as a single JSON document on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LookStore for JsonFileStore {
    fn load(&self) -> Result<Vec<SavedLook>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|e| StudioError::Persistence(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StudioError::Persistence(e.to_string())),
        }
    }

    fn save(&self, looks: &[SavedLook]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StudioError::Persistence(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(looks)
            .map_err(|e| StudioError::Persistence(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| StudioError::Persistence(e.to_string()))
    }
}

/// In-memory store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    looks: Mutex<Vec<SavedLook>>,
}

impl LookStore for MemoryStore {
    fn load(&self) -> Result<Vec<SavedLook>> {
        Ok(self
            .looks
            .lock()
            .map_err(|e| StudioError::Persistence(e.to_string()))?
            .clone())
    }

    fn save(&self, looks: &[SavedLook]) -> Result<()> {
        *self
            .looks
            .lock()
            .map_err(|e| StudioError::Persistence(e.to_string()))? = looks.to_vec();
        Ok(())
    }
}

/// The wardrobe: an ordered list of saved looks (newest first) backed by
/// a `LookStore`.
pub struct Wardrobe {
    looks: Vec<SavedLook>,
    store: Box<dyn LookStore>,
}

impl Wardrobe {
    /// Load the wardrobe from a store. A failed load starts an empty
    /// wardrobe rather than failing the session.
    pub fn open(store: Box<dyn LookStore>) -> Self {
        let looks = store.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load wardrobe, starting empty");
            Vec::new()
        });
        Self { looks, store }
    }

    /// Ephemeral wardrobe with no durable backing.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::default()))
    }

    /// Snapshot an image as a new look, newest first. Persists through
    /// the store; a write failure is logged and the look is kept in
    /// memory regardless.
    pub fn save(&mut self, name: &str, slot_id: &str, image: ImageState) -> &SavedLook {
        let look = SavedLook {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            slot_id: slot_id.to_string(),
            image,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.looks.insert(0, look);
        self.persist();
        &self.looks[0]
    }

    /// Remove a look by id. Returns whether anything was removed.
    pub fn delete(&mut self, look_id: &str) -> bool {
        let before = self.looks.len();
        self.looks.retain(|l| l.id != look_id);
        let removed = self.looks.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn looks(&self) -> &[SavedLook] {
        &self.looks
    }

    pub fn looks_for_slot(&self, slot_id: &str) -> Vec<&SavedLook> {
        self.looks.iter().filter(|l| l.slot_id == slot_id).collect()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.looks) {
            tracing::warn!(error = %e, "wardrobe write failed; in-memory list remains authoritative");
        }
    }
}
