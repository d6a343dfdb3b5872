//! Domain layer - Students and the registry that owns them.
//!
//! Pure in-memory model with no I/O. Persistence lives in
//! `crate::adapters::persistence`, which only sees these types.

pub mod registry;
pub mod student;

pub use registry::{Registry, StudentNumber};
pub use student::{GradeMap, Student};
