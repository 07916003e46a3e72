//! Error types for store operations.

use crate::model::{OrderId, ProductId};
use grocer_actor::FrameworkError;
use thiserror::Error;

/// Everything that can go wrong operating on a store.
///
/// All variants are recoverable: the actor reports the failure and carries
/// on, and the operation that failed has changed nothing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No store with the given id.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// An order line or catalog operation referenced an unknown product.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A status update referenced an unknown order.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// A quantity that must be positive was not.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A line asked for more units than the shelf holds.
    #[error("Not enough stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// Malformed input at the boundary: blank name, bad price, empty order.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The actor or its channels failed.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::ActorCommunication(msg)
    }
}

impl StoreError {
    /// Recovers the domain error that traveled boxed through the framework.
    ///
    /// Entity failures come back as [`FrameworkError::EntityError`] wrapping
    /// the original [`StoreError`]; downcasting restores it so callers can
    /// match on the real variant instead of a stringified copy. A missing
    /// store id surfaces as [`StoreError::StoreNotFound`].
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<StoreError>() {
                Ok(err) => *err,
                Err(other) => StoreError::ActorCommunication(other.to_string()),
            },
            FrameworkError::NotFound(id) => StoreError::StoreNotFound(id),
            other => StoreError::ActorCommunication(other.to_string()),
        }
    }
}
