//! # ActorClient Trait
//!
//! Shared surface for domain-specific client wrappers. A wrapper exposes its
//! own named operations (place an order, reserve stock) but `get` and
//! `delete` are the same everywhere, so they come as provided methods built
//! on the inner [`ResourceClient`].

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by typed client wrappers to inherit the common operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Store> for StoreClient {
///     type Error = StoreError;
///
///     fn inner(&self) -> &ResourceClient<Store> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> StoreError {
///         StoreError::from_framework(e)
///     }
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The wrapper's error type.
    type Error: From<String> + Send + Sync;

    /// The generic client the wrapper is built around.
    fn inner(&self) -> &ResourceClient<T>;

    /// Translate plumbing failures into the wrapper's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
