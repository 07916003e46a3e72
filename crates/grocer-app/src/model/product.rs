//! Product catalog types.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products. Unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// One listing in a store's catalog.
///
/// `quantity` is the units currently on the shelf; order placement decrements
/// it and the type keeps it from ever going below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// The fields a store owner supplies when adding a product or replacing an
/// existing listing. Validated by [`Store`](crate::model::Store) before any
/// catalog change: the name must be non-blank and the price non-negative and
/// finite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}
