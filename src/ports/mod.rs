//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces the domain and use cases need from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `LineSource` / `LineSink`: line-oriented text streams for the codec
//! - `StudentStore`: whole-registry load/save

pub mod lines;
pub mod store;

pub use lines::{LineSink, LineSource};
pub use store::StudentStore;
