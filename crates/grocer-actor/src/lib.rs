//! # grocer-actor
//!
//! Generic resource-actor plumbing for the grocer application.
//!
//! Every stateful resource in the system (a retail store with its catalog and
//! order ledger, for instance) is managed by a [`ResourceActor`]: a Tokio task
//! that owns a map of entities and processes requests one at a time. Callers
//! never touch the entity map directly; they hold a cheap, cloneable
//! [`ResourceClient`] and exchange messages over channels.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type and its behavior.
//! 2. **Runtime** ([`ResourceActor`]) - the message loop owning all state.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request API.
//!
//! Because each actor drains its mailbox sequentially, entity state needs no
//! locks, and multi-step mutations (validate, then apply) are atomic with
//! respect to every other request against the same actor.
//!
//! ## Example
//!
//! ```rust
//! use grocer_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf {
//!     id: u32,
//!     capacity: u32,
//! }
//!
//! #[derive(Debug)]
//! struct ShelfCreate {
//!     capacity: u32,
//! }
//!
//! #[derive(Debug)]
//! struct ShelfUpdate {
//!     capacity: Option<u32>,
//! }
//!
//! #[derive(Debug)]
//! enum ShelfAction {
//!     FreeSlots,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("shelf error")]
//! struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ShelfAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, capacity: params.capacity })
//!     }
//!
//!     async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(capacity) = update.capacity {
//!             self.capacity = capacity;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             ShelfAction::FreeSlots => Ok(self.capacity),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ShelfCreate { capacity: 12 }).await.unwrap();
//!     let free = client.perform_action(id, ShelfAction::FreeSlots).await.unwrap();
//!     assert_eq!(free, 12);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies (clients of other actors, shared config) are passed to
//! [`ResourceActor::run`] rather than to the constructor. Actors can therefore
//! be created in any order and wired together afterwards.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient) and the
//! lower-level [`create_mock_client`](mock::create_mock_client) helpers so
//! client-side logic can be exercised without spawning any actor task.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
