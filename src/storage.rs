//! Key-value persistence for project documents.
//!
//! The crate never talks to a platform store directly. Embedders hand in
//! anything that implements [`KeyValueStore`] (a browser's local storage,
//! a file, a test map) and the helpers speak project JSON through it.

use alloc::{
  collections::BTreeMap,
  string::{String, ToString},
};

use crate::{project::Project, DotgridError};

/// The store key the editor uses for its autosave slot.
pub const DEFAULT_STORAGE_KEY: &str = "dotgrid.project.v2";

/// A string-to-string store the embedder provides.
pub trait KeyValueStore {
  /// Reads the value at `key`, if any.
  fn get(&self, key: &str) -> Option<String>;

  /// Writes `value` at `key`, returning whether the store accepted it.
  ///
  /// A store can refuse a write (a quota, a read-only mount). `false`
  /// becomes [`DotgridError::Storage`] at [`save_project`].
  fn set(&mut self, key: &str, value: &str) -> bool;
}

/// Saves a document at `key`.
///
/// ## Failure
/// * `Json` if the document can't be rendered.
/// * `Storage` if the store refuses the write.
pub fn save_project(
  store: &mut impl KeyValueStore, key: &str, project: &Project,
) -> Result<(), DotgridError> {
  let json = project.to_json()?;
  if !store.set(key, &json) {
    log::warn!("storage: store refused write at {:?}", key);
    return Err(DotgridError::Storage);
  }
  log::info!("storage: saved project at {:?} ({} bytes)", key, json.len());
  Ok(())
}

/// Loads the document at `key`, if a readable one is there.
///
/// An absent key, or a value that no longer parses, comes back as `None`.
/// The parse failure is logged rather than surfaced, so a corrupt autosave
/// never wedges startup.
pub fn load_project(store: &impl KeyValueStore, key: &str) -> Option<Project> {
  let json = store.get(key)?;
  match Project::from_json(&json) {
    Ok(project) => Some(project),
    Err(e) => {
      log::warn!("storage: dropping unreadable project at {:?}: {:?}", key, e);
      None
    }
  }
}

/// An in-memory [`KeyValueStore`] for tests and embedders without a
/// platform store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: BTreeMap<String, String>,
}
impl MemoryStore {
  /// An empty store.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}
impl KeyValueStore for MemoryStore {
  #[inline]
  fn get(&self, key: &str) -> Option<String> {
    self.entries.get(key).cloned()
  }
  #[inline]
  fn set(&mut self, key: &str, value: &str) -> bool {
    self.entries.insert(key.to_string(), value.to_string());
    true
  }
}
