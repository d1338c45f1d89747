//! In-process [`TodoRepository`] used by tests and storage-less local runs.
//!
//! Mirrors the PostgreSQL semantics: ids come from a monotonically
//! increasing sequence and are never reused, even after deletes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::types::DbId;

use crate::error::{RepoError, RepoResult};
use crate::models::todo::Todo;
use crate::repositories::TodoRepository;

#[derive(Default)]
struct Store {
    rows: BTreeMap<DbId, Todo>,
    last_id: DbId,
}

/// Thread-safe via interior `RwLock`; wrap in `Arc` to share.
#[derive(Default)]
pub struct InMemoryTodoRepo {
    store: RwLock<Store>,
}

impl InMemoryTodoRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepo {
    async fn list_all(&self) -> RepoResult<Vec<Todo>> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn create(&self, name: &str) -> RepoResult<Todo> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let now = chrono::Utc::now();
        let todo = Todo {
            id: store.last_id,
            name: name.to_string(),
            completed: None,
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn get_by_id(&self, id: DbId) -> RepoResult<Todo> {
        let store = self.store.read().await;
        store
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound { id })
    }

    async fn update(&self, id: DbId, name: &str, completed: Option<bool>) -> RepoResult<Todo> {
        let mut store = self.store.write().await;
        let todo = store
            .rows
            .get_mut(&id)
            .ok_or(RepoError::NotFound { id })?;
        todo.name = name.to_string();
        todo.completed = completed;
        todo.updated_at = chrono::Utc::now();
        Ok(todo.clone())
    }

    async fn delete_by_id(&self, id: DbId) -> RepoResult<()> {
        let mut store = self.store.write().await;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound { id })
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
