//! Domain types and rules for the todo service.
//!
//! Nothing in this crate touches storage or HTTP; both `todo-db` and
//! `todo-api` build on it.

pub mod error;
pub mod todo;
pub mod types;
