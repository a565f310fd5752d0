use thiserror::Error;

/// Errors surfaced by the activity repository. Callers only ever branch on
/// `NotFound`; everything else is passed along as-is.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("activity not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("unexpected {column} value in storage: {value}")]
    Decode {
        column: &'static str,
        value: String,
    },
}
