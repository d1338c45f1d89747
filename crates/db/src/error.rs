use todo_core::types::DbId;

/// Failures surfaced by repository operations.
///
/// Repositories never validate input, so there are only two outcomes: the
/// row is missing, or storage itself failed.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Todo with id {id} not found")]
    NotFound { id: DbId },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
