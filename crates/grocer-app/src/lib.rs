//! # grocer-app
//!
//! A prototype grocery ordering system: customers pick a store, browse its
//! catalog, build a cart, and check out for delivery or pickup; store owners
//! manage inventory and work through the order queue. Everything lives in
//! process memory and resets on restart.
//!
//! ## Layers
//!
//! - [`model`] - the domain types: [`Store`](model::Store) (one retail
//!   location's catalog and order ledger), [`Product`](model::Product),
//!   [`Order`](model::Order), and the state-mutation logic on `Store`.
//! - [`store_actor`] - wires `Store` into the generic
//!   [`ResourceActor`](grocer_actor::ResourceActor). Every store lives behind
//!   one actor task, so catalog and ledger mutations are serialized and
//!   concurrent checkouts can never oversell a product.
//! - [`clients`] - [`StoreClient`](clients::StoreClient), the typed API the
//!   rest of the application talks to.
//! - [`session`] - per-customer cart state, keyed by store. A collaborator of
//!   the core, never touched by the actor itself.
//! - [`checkout`] - the customer flow: cart accumulation with stock checks,
//!   cart summaries, and checkout.
//! - [`lifecycle`] - startup, demo-store seeding, and graceful shutdown.
//!
//! The demo binary (`cargo run --bin grocer`) walks both flows end to end;
//! set `RUST_LOG=info` to watch the actors work.

pub mod checkout;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod store_actor;
