//! JSONL Store - File-backed Student Store
//!
//! Keeps the registry in a single JSON Lines file. Saves go to a
//! sibling `.tmp` file first and are then renamed over the target,
//! so the file is always either the old or the new version.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{info, instrument};

use super::codec;
use crate::domain::Registry;
use crate::error::PersistenceError;
use crate::ports::store::StudentStore;

/// JSON Lines file store.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    /// Path to the data file.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl JsonlStore {
    /// Create a store over `path`. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StudentStore for JsonlStore {
    /// Read and decode the whole file.
    ///
    /// A missing file is `StoreUnavailable` like any other open failure;
    /// bytes that are not UTF-8 are a malformed record on their line.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Registry, PersistenceError> {
        let content = fs::read(&self.path).await.inspect_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                info!("No student file found");
            }
        })?;

        let registry = codec::load_all(&mut content.as_slice())?;
        info!(count = registry.len(), "Students loaded");
        Ok(registry)
    }

    /// Encode the registry and replace the file atomically (tmp → rename).
    #[instrument(skip(self, registry), fields(path = %self.path.display(), count = registry.len()))]
    async fn save(&self, registry: &Registry) -> Result<(), PersistenceError> {
        let mut buf = Vec::new();
        codec::save_all(registry, &mut buf)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        fs::write(&self.tmp_path, &buf).await?;
        fs::rename(&self.tmp_path, &self.path).await?;

        info!("Students saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Student;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("gradebook-store-{}-{name}", std::process::id()))
            .join("students.json")
    }

    #[test]
    fn test_tmp_path_is_sibling() {
        let store = JsonlStore::new("data/students.json");
        assert_eq!(store.tmp_path, PathBuf::from("data/students.json.tmp"));
        assert_eq!(store.location(), "data/students.json");
    }

    #[tokio::test]
    async fn test_missing_file_is_store_unavailable() {
        let store = JsonlStore::new(temp_path("missing"));
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::StoreUnavailable(_)));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_malformed_record() {
        let path = temp_path("utf8");
        fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        fs::write(&path, b"{\"name\":\"Ok\",\"grades\":{}}\n{\"name\":\"A\xff\",\"grades\":{}}\n")
            .await
            .unwrap();

        let err = JsonlStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::MalformedRecord { line: 2, .. }));

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_unencodable_grade_keeps_previous_file() {
        let path = temp_path("nonfinite");
        let store = JsonlStore::new(&path);

        let mut good = Registry::new();
        good.add(1, Student::new("Ada"));
        store.save(&good).await.unwrap();

        let mut bad = Student::new("Bad");
        bad.add_grade("Math", f64::INFINITY);
        let mut broken = good.clone();
        broken.add(2, bad);
        let err = store.save(&broken).await.unwrap_err();
        assert!(err.is_malformed());

        assert_eq!(store.load().await.unwrap(), good);
        assert!(!store.tmp_path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_contents() {
        let path = temp_path("overwrite");
        let store = JsonlStore::new(&path);

        let mut first = Registry::new();
        first.add(1, Student::new("Ada"));
        first.add(2, Student::new("Bo"));
        store.save(&first).await.unwrap();

        let mut second = Registry::new();
        second.add(9, Student::new("Cy"));
        store.save(&second).await.unwrap();

        let text = fs::read_to_string(&path).await.unwrap();
        assert_eq!(text, "{\"name\":\"Cy\",\"grades\":{}}\n");
        assert!(!store.tmp_path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_unreadable_path_is_store_unavailable() {
        // A directory cannot be read as a file.
        let store = JsonlStore::new(std::env::temp_dir());
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::StoreUnavailable(_)));
    }
}
