//! # ActorEntity Trait
//!
//! Contract every resource type must satisfy to be managed by a
//! [`ResourceActor`](crate::ResourceActor). The associated types pin down the
//! id, the create/update payloads, the domain-action enum, and the error type,
//! so a request built for one entity type can never be sent to another.
//!
//! `from_create_params` runs synchronously; the lifecycle hooks are async so
//! an entity can call out to other actors through its `Context`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Behavior required of any entity managed by a `ResourceActor`.
///
/// One error type covers the whole entity rather than one per operation. The
/// union is slightly imprecise (an action that can only fail one way still
/// declares the full enum) but keeps client signatures uniform.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. `From<u32>` lets the actor allocate ids from its
    /// internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Domain-specific operations beyond plain CRUD.
    type Action: Send + Sync + Debug;

    /// Result type returned by [`handle_action`](Self::handle_action).
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at [`run`](crate::ResourceActor::run) time.
    /// Use `()` when the entity needs none.
    type Context: Send + Sync;

    /// Entity-level error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from a freshly allocated id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs right after the entity is constructed, before it is stored.
    /// Default is a no-op.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs right before the entity is removed. Default is a no-op.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Execute a domain action against the entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
