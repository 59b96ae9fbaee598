use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::error::StoreError;
use crate::core::models::Project;

// Raw string storage keyed by name.
pub trait BlobBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// `window.localStorage`. The handle is looked up on every call so the
// backend itself carries no JS state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }

    // Whether the browser lets us use local storage at all.
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl BlobBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

// In-process backend. Clones share the same cells.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    cells: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }
}

impl BlobBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Load/save contract the registry persists through.
pub trait ProjectStore {
    fn load(&self) -> Result<Vec<Project>, StoreError>;
    fn save(&self, projects: &[Project]) -> Result<(), StoreError>;
}

// Whole project list serialized as one JSON value under a single key.
pub struct PersistentStore<B> {
    backend: B,
    key: String,
    seed: fn() -> Vec<Project>,
}

impl<B: BlobBackend> PersistentStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            seed: super::seed::seed_projects,
        }
    }

    pub fn with_seed(mut self, seed: fn() -> Vec<Project>) -> Self {
        self.seed = seed;
        self
    }
}

impl<B: BlobBackend> ProjectStore for PersistentStore<B> {
    fn load(&self) -> Result<Vec<Project>, StoreError> {
        match self.backend.read(&self.key)? {
            Some(raw) => {
                let projects: Vec<Project> =
                    serde_json::from_str(&raw).map_err(StoreError::Corrupt)?;
                tracing::debug!(key = %self.key, count = projects.len(), "loaded projects");
                Ok(projects)
            }
            None => {
                tracing::info!(key = %self.key, "no saved projects, using seed data");
                Ok((self.seed)())
            }
        }
    }

    fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(projects).map_err(StoreError::Encode)?;
        self.backend.write(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = projects.len(), bytes = raw.len(), "saved projects");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const KEY: &str = "approveflow_projects";

    #[test]
    fn load_falls_back_to_seed_when_key_is_missing() {
        let store = PersistentStore::new(MemoryBackend::new(), KEY);
        let projects = store.load().unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Neon Brand Identity");
    }

    #[test]
    fn save_then_load_reproduces_the_list() {
        let backend = MemoryBackend::new();
        let store = PersistentStore::new(backend.clone(), KEY);
        let seeded = store.load().unwrap();

        store.save(&seeded).unwrap();
        let first_blob = backend.raw(KEY).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, seeded);

        store.save(&reloaded).unwrap();
        assert_eq!(backend.raw(KEY).unwrap(), first_blob);
    }

    #[test]
    fn empty_saved_list_is_not_replaced_by_seed() {
        let store = PersistentStore::new(MemoryBackend::with_value(KEY, "[]"), KEY);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_blob_is_reported_as_corrupt() {
        let store = PersistentStore::new(MemoryBackend::with_value(KEY, "{not json"), KEY);
        assert_matches!(store.load(), Err(StoreError::Corrupt(_)));
    }

    #[test]
    fn custom_seed_is_used() {
        let store = PersistentStore::new(MemoryBackend::new(), KEY).with_seed(Vec::new);
        assert!(store.load().unwrap().is_empty());
    }
}
