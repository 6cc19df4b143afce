use crate::node::DialogId;

/// Alias for `Result<T, PalError>`.
pub type PalResult<T> = Result<T, PalError>;

/// Errors that can occur when assembling dialog graphs.
#[derive(Debug, thiserror::Error)]
pub enum PalError {
    /// A node id is already used elsewhere in the collection.
    #[error("duplicate dialog id: {0}")]
    DuplicateId(DialogId),

    /// A collection with the same name already exists in the library.
    #[error("collection already exists: \"{0}\"")]
    DuplicateCollection(String),
}
