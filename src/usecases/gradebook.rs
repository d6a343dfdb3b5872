//! Gradebook - Registry Session Lifecycle
//!
//! Loads the registry once at startup and saves it once on exit.
//! A failed load is logged and the session continues with an empty
//! registry; a failed save is logged and reported to the caller.
//! Nothing is retried.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::domain::Registry;
use crate::error::PersistenceError;
use crate::ports::store::StudentStore;

/// An open registry together with the store it came from.
pub struct Gradebook<S: StudentStore> {
  /// Persistence port.
  store: Arc<S>,
  /// Working registry mutated by the shell.
  registry: Registry,
  /// Error from the startup load, if it failed.
  load_error: Option<PersistenceError>,
}

impl<S: StudentStore> Gradebook<S> {
  /// Load the registry from `store`, degrading to empty on failure.
  #[instrument(skip(store), fields(store = %store.location()))]
  pub async fn open(store: Arc<S>) -> Self {
    let (registry, load_error) = match store.load().await {
      Ok(registry) => {
        info!(count = registry.len(), "Registry loaded");
        (registry, None)
      }
      Err(e) => {
        warn!(error = %e, "Failed to load students, continuing with an empty registry");
        (Registry::new(), Some(e))
      }
    };

    Self {
      store,
      registry,
      load_error,
    }
  }

  /// Working registry.
  pub const fn registry(&self) -> &Registry {
    &self.registry
  }

  /// Mutable working registry.
  pub fn registry_mut(&mut self) -> &mut Registry {
    &mut self.registry
  }

  /// The error the startup load failed with, if any.
  pub const fn load_error(&self) -> Option<&PersistenceError> {
    self.load_error.as_ref()
  }

  /// Where the registry is persisted.
  pub fn location(&self) -> String {
    self.store.location()
  }

  /// Write the registry back to the store.
  #[instrument(skip(self), fields(count = self.registry.len()))]
  pub async fn save(&self) -> Result<(), PersistenceError> {
    match self.store.save(&self.registry).await {
      Ok(()) => {
        info!("Registry saved");
        Ok(())
      }
      Err(e) => {
        error!(error = %e, "Failed to save students");
        Err(e)
      }
    }
  }
}
