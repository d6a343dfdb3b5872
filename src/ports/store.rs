//! Store Port - Whole-registry Persistence Interface
//!
//! A store loads the full registry at startup and writes it back on
//! exit. Each call is a single pass: the backing resource is acquired,
//! fully consumed or written, and released before the call returns.

use async_trait::async_trait;

use crate::domain::Registry;
use crate::error::PersistenceError;

/// Trait for registry persistence providers.
#[async_trait]
pub trait StudentStore: Send + Sync + 'static {
  /// Load every stored record, numbering them 1..=N in storage order.
  ///
  /// A malformed record aborts the load; no partial registry is returned.
  async fn load(&self) -> Result<Registry, PersistenceError>;

  /// Replace the stored contents with `registry`, in enumeration order.
  async fn save(&self, registry: &Registry) -> Result<(), PersistenceError>;

  /// Human-readable location of the backing store, for logs and prompts.
  fn location(&self) -> String;
}
