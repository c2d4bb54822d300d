use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Hero with id {0} not found")]
    HeroNotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),
}
