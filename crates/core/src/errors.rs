use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProffyError {
    #[error("Missing filters to search classes")]
    MissingFilters,

    #[error("Unexpected error while creating new class")]
    CreationFailed(#[source] eyre::Report),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type ProffyResult<T> = Result<T, ProffyError>;
