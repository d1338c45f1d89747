//! Repository for the `todos` table.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::types::DbId;

use crate::error::{RepoError, RepoResult};
use crate::models::todo::Todo;

/// Column list for `todos` queries.
const COLUMNS: &str = "id, name, completed, created_at, updated_at";

/// Storage operations over the todo entity.
///
/// Implementations must be safe to share across concurrently running
/// requests.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// List every todo, ordered by ascending id.
    async fn list_all(&self) -> RepoResult<Vec<Todo>>;

    /// Insert a todo with an unset completion flag.
    async fn create(&self, name: &str) -> RepoResult<Todo>;

    /// Fetch a single todo.
    async fn get_by_id(&self, id: DbId) -> RepoResult<Todo>;

    /// Overwrite both mutable fields of an existing todo.
    async fn update(&self, id: DbId, name: &str, completed: Option<bool>) -> RepoResult<Todo>;

    /// Hard-delete a todo.
    async fn delete_by_id(&self, id: DbId) -> RepoResult<()>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> RepoResult<()>;
}

/// PostgreSQL-backed [`TodoRepository`].
///
/// Pooling is left to sqlx; cloning shares the same pool.
#[derive(Clone)]
pub struct PgTodoRepo {
    pool: PgPool,
}

impl PgTodoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepo {
    async fn list_all(&self) -> RepoResult<Vec<Todo>> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        let todos = sqlx::query_as::<_, Todo>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn create(&self, name: &str) -> RepoResult<Todo> {
        let query = format!("INSERT INTO todos (name) VALUES ($1) RETURNING {COLUMNS}");
        let todo = sqlx::query_as::<_, Todo>(&query)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn get_by_id(&self, id: DbId) -> RepoResult<Todo> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { id })
    }

    /// Single conditional write; zero matched rows means the todo is gone.
    async fn update(&self, id: DbId, name: &str, completed: Option<bool>) -> RepoResult<Todo> {
        let query = format!(
            "UPDATE todos SET \
                 name = $2, \
                 completed = $3, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(name)
            .bind(completed)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound { id })
    }

    async fn delete_by_id(&self, id: DbId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound { id });
        }
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
