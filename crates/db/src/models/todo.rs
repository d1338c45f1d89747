//! Todo entity and request DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
///
/// `completed` is tri-state: `None` means it was never set.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub name: String,
    pub completed: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a todo.
///
/// A missing `name` deserializes as empty so it fails name validation
/// rather than body parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub name: String,
}

/// DTO for partially updating a todo. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Overlay the supplied fields onto `todo`.
    ///
    /// A supplied `completed` becomes a known value, never unset.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(name) = self.name {
            todo.name = name;
        }
        if let Some(completed) = self.completed {
            todo.completed = Some(completed);
        }
    }
}
