//! JSON File Store
//!
//! Whole-collection access to the backing file. Every call does full I/O;
//! nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{DomainResult, Todo};

/// On-disk layout: `{"todos": [...]}`
#[derive(Debug, Deserialize)]
struct TodoDocument {
    todos: Vec<Todo>,
}

/// Handle to the JSON file holding the todo collection
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole collection
    ///
    /// A missing file is created empty. Any other failure is returned.
    pub async fn read_all(&self) -> DomainResult<Vec<Todo>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => {
                let document: TodoDocument = serde_json::from_str(&data)?;
                Ok(document.todos)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "store file missing, creating empty store");
                self.write_all(&[]).await?;
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the whole file with `todos`, pretty-printed
    pub async fn write_all(&self, todos: &[Todo]) -> DomainResult<()> {
        let document = TodoDocumentRef { todos };
        let data = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct TodoDocumentRef<'a> {
    todos: &'a [Todo],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("db.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let todos = store.read_all().await.expect("read failed");
        assert!(todos.is_empty());

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(value, serde_json::json!({ "todos": [] }));
    }

    #[tokio::test]
    async fn test_write_then_read_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let todos = vec![
            Todo::new("b", "second"),
            Todo::new("a", "first"),
            Todo { id: "c".into(), text: "third".into(), completed: true },
        ];

        store.write_all(&todos).await.unwrap();
        let read = store.read_all().await.unwrap();
        assert_eq!(read, todos);

        store.write_all(&read).await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), todos);
    }

    #[tokio::test]
    async fn test_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_all(&[Todo::new("1", "Buy milk")]).await.unwrap();

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            on_disk,
            "{\n  \"todos\": [\n    {\n      \"id\": \"1\",\n      \"text\": \"Buy milk\",\n      \"completed\": false\n    }\n  ]\n}"
        );
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, DomainError::Serialization(_)));
        // the bad file is left alone
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the file should be
        let store = JsonStore::new(dir.path());

        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }
}
