//! Typed wrappers around [`ResourceClient`](grocer_actor::ResourceClient).

pub mod store_client;

pub use store_client::*;
