//! Persistence error taxonomy.
//!
//! Two conditions can stop a load or save: a line that does not decode
//! into a student record, and a backing store that cannot be opened,
//! read or written. Neither is retried; the caller decides how to degrade.

use thiserror::Error;

/// A record that cannot cross the line format in one direction or the other.
///
/// On load: invalid UTF-8, invalid JSON, a non-string `name`, a
/// non-object `grades` or non-numeric grade elements. On save: a grade
/// JSON cannot represent.
#[derive(Debug, Error)]
pub enum MalformedRecord {
    #[error("malformed student record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("student record is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("grade {grade} for subject {subject:?} is not a finite number")]
    NonFiniteGrade { subject: String, grade: f64 },
}

/// Errors surfaced by `load_all` / `save_all` and the store adapters.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The record on the given 1-based line failed to decode or encode;
    /// the whole load or save was aborted.
    #[error("line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: MalformedRecord,
    },

    /// The backing store could not be opened, read or written.
    #[error("student store unavailable: {0}")]
    StoreUnavailable(#[from] std::io::Error),
}

impl PersistenceError {
    /// True when the failure came from record contents rather than the store.
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }

    /// True when the backing store simply does not exist yet (first run).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StoreUnavailable(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
