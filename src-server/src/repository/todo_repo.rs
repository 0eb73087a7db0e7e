//! Todo Repository
//!
//! JSON-file implementation of `Repository<Todo>`. Each operation reads the
//! whole collection, changes it in memory and writes it back. The store sits
//! behind one async mutex, so read-modify-write cycles never interleave
//! within this process.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Todo, TodoPatch};
use super::json_store::JsonStore;
use super::traits::Repository;

pub struct TodoRepository {
    store: Arc<Mutex<JsonStore>>,
}

impl TodoRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    type Patch = TodoPatch;

    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let store = self.store.lock().await;
        let mut todos = store.read_all().await?;
        todos.push(entity.clone());
        store.write_all(&todos).await?;
        Ok(entity.clone())
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let store = self.store.lock().await;
        store.read_all().await
    }

    async fn update(&self, id: &String, patch: &TodoPatch) -> DomainResult<usize> {
        let store = self.store.lock().await;
        let mut todos = store.read_all().await?;

        let mut matched = 0;
        for todo in todos.iter_mut().filter(|todo| &todo.id == id) {
            patch.apply(todo);
            matched += 1;
        }

        store.write_all(&todos).await?;
        Ok(matched)
    }

    async fn delete(&self, id: &String) -> DomainResult<usize> {
        let store = self.store.lock().await;
        let mut todos = store.read_all().await?;

        let before = todos.len();
        todos.retain(|todo| &todo.id != id);
        let removed = before - todos.len();

        store.write_all(&todos).await?;
        Ok(removed)
    }
}
