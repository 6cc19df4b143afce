/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur when operating a conversation engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An empty dialog collection was supplied to
    /// [`load_dialogs`](crate::ConversationEngine::load_dialogs); the
    /// previously loaded graph is kept.
    #[error("dialog collection is empty")]
    EmptyCollection,
}
