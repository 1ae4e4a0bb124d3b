use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown device attribute: {0}")]
    UnknownAttribute(String),

    #[error("Required column was null: {0}")]
    MissingRequiredField(&'static str),

    #[error("Cursor read failed: {0}")]
    CursorReadError(#[source] anyhow::Error),

    #[error("Invalid filter value: {0}")]
    InvalidFilterValue(String),

    #[error("Invalid device ID: {0}")]
    InvalidDeviceId(String),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),

    #[error("Invalid association type: {0}")]
    InvalidAssociationType(String),

    #[error("User lookup request must carry at least one user name or email")]
    EmptyLookupRequest,

    #[error("Association already exists: {0}")]
    AssociationAlreadyExists(String),

    #[error("Association not found: {0}")]
    AssociationNotFound(String),

    #[error("No activation state for device: {0}")]
    ActivationStateNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
