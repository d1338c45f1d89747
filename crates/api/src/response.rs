//! Wire representations returned to HTTP clients.

use serde::Serialize;
use todo_core::todo::completed_flag;
use todo_core::types::DbId;
use todo_db::models::todo::Todo;

/// A todo as it appears on the wire.
///
/// Storage-only columns are dropped and the tri-state completion flag is
/// collapsed to a plain boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoResponse {
    pub id: DbId,
    pub name: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name,
            completed: completed_flag(todo.completed),
        }
    }
}
