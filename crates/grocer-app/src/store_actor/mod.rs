//! # Store Actor
//!
//! Runs every [`Store`] behind a single [`ResourceActor`] task: the store
//! registry. Store-level CRUD comes from the framework; catalog edits, order
//! placement, and status updates are [`StoreAction`]s handled by the entity
//! implementation in [`entity`].
//!
//! Sequential message processing is what makes order placement safe here.
//! The validate-then-commit steps of
//! [`Store::place_order`](crate::model::Store::place_order) run to completion
//! before the next request is even read, so two concurrent checkouts cannot
//! interleave and oversell a shelf.
//!
//! ```rust,ignore
//! let (actor, generic_client) = store_actor::new();
//! let stores = StoreClient::new(generic_client);
//! tokio::spawn(actor.run(()));
//!
//! let id = stores.create_store(StoreCreate { name: "Corner Shop".into() }).await?;
//! stores.add_product(id, ProductFields { name: "Bread".into(), price: 3.49, quantity: 50 }).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Store;
use grocer_actor::{ResourceActor, ResourceClient};

/// Creates the store registry actor and its generic client.
pub fn new() -> (ResourceActor<Store>, ResourceClient<Store>) {
    ResourceActor::new(32)
}
