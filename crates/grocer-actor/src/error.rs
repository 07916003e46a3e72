//! # Framework Errors
//!
//! Failures of the plumbing itself, as opposed to entity-level errors, which
//! travel boxed inside [`FrameworkError::EntityError`].

/// Errors raised by the actor runtime and channel layer.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed; it is no longer running.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity with the given id exists in the actor's store.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The entity itself rejected the operation.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
