//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (file I/O, JSON).
//!
//! Adapter categories:
//! - `persistence`: JSON Lines codec and file-backed student store

pub mod persistence;
