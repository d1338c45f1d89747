//! Repository layer: the only place queries are issued.

pub mod memory_todo_repo;
pub mod todo_repo;

pub use memory_todo_repo::InMemoryTodoRepo;
pub use todo_repo::{PgTodoRepo, TodoRepository};
