//! One retail location: its catalog and its order ledger.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

use crate::store_actor::StoreError;

use super::{
    round_to_cents, FulfillmentMethod, Order, OrderId, OrderLine, OrderStatus, Product,
    ProductFields, ProductId,
};

/// Type-safe identifier for stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(pub u32);

impl From<u32> for StoreId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store_{}", self.0)
    }
}

/// Payload for registering a new store.
#[derive(Debug, Clone)]
pub struct StoreCreate {
    pub name: String,
}

/// Payload for updating a store's own fields (not its catalog).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
}

/// A retail location: product catalog plus the ledger of placed orders.
///
/// All mutation goes through the methods below, which uphold two rules:
/// stock never goes negative, and a failed operation changes nothing.
#[derive(Debug, Clone)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub products: HashMap<ProductId, Product>,
    pub orders: Vec<Order>,
}

impl Store {
    pub fn new(id: StoreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            products: HashMap::new(),
            orders: Vec::new(),
        }
    }

    /// Next product id: one past the current maximum, or 1 for an empty
    /// catalog. Deleting the highest-numbered product frees its id for reuse.
    fn next_product_id(&self) -> ProductId {
        ProductId(self.products.keys().map(|id| id.0).max().unwrap_or(0) + 1)
    }

    /// Next order id: one past the current maximum, or 1 for an empty ledger.
    /// Orders are never deleted, so these are strictly increasing.
    fn next_order_id(&self) -> OrderId {
        OrderId(self.orders.iter().map(|o| o.id.0).max().unwrap_or(0) + 1)
    }

    fn validate_fields(fields: &ProductFields) -> Result<(), StoreError> {
        if fields.name.trim().is_empty() {
            return Err(StoreError::InvalidInput("product name is required".into()));
        }
        if !fields.price.is_finite() || fields.price < 0.0 {
            return Err(StoreError::InvalidInput(format!(
                "invalid price: {}",
                fields.price
            )));
        }
        Ok(())
    }

    /// Adds a product to the catalog under a freshly assigned id.
    ///
    /// Rejects blank names and negative or non-finite prices with
    /// [`StoreError::InvalidInput`].
    pub fn add_product(&mut self, fields: ProductFields) -> Result<Product, StoreError> {
        Self::validate_fields(&fields)?;
        let id = self.next_product_id();
        let product = Product::new(id, fields.name, fields.price, fields.quantity);
        self.products.insert(id, product.clone());
        Ok(product)
    }

    /// Replaces a listing's name, price, and quantity.
    ///
    /// An unknown `product_id` is not an error: the catalog is left untouched
    /// and `None` is returned so the caller can tell the update landed on
    /// nothing. Field validation applies either way.
    pub fn update_product(
        &mut self,
        product_id: ProductId,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        Self::validate_fields(&fields)?;
        match self.products.get_mut(&product_id) {
            Some(product) => {
                product.name = fields.name;
                product.price = fields.price;
                product.quantity = fields.quantity;
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    /// Removes a listing if present; no-op otherwise.
    pub fn delete_product(&mut self, product_id: ProductId) {
        self.products.remove(&product_id);
    }

    /// Places an order: validates every line, commits the stock, appends to
    /// the ledger.
    ///
    /// Validation runs over all lines before any stock is touched, so a
    /// rejected order leaves both catalog and ledger exactly as they were.
    /// Requested quantities are accumulated per product during validation;
    /// two lines for the same product must be coverable together, not just
    /// individually.
    ///
    /// The total is the sum of `price * quantity` over the lines, rounded to
    /// cents once at the end. The new order starts as
    /// [`OrderStatus::Pending`].
    pub fn place_order(
        &mut self,
        lines: Vec<OrderLine>,
        fulfillment: FulfillmentMethod,
    ) -> Result<Order, StoreError> {
        if lines.is_empty() {
            return Err(StoreError::InvalidInput("order has no lines".into()));
        }

        // Pass 1: validate everything. No mutation happens here.
        let mut total = 0.0;
        let mut required: HashMap<ProductId, u32> = HashMap::new();
        for line in &lines {
            let product = self
                .products
                .get(&line.product_id)
                .ok_or(StoreError::ProductNotFound(line.product_id))?;
            if line.quantity == 0 {
                return Err(StoreError::InvalidQuantity(line.quantity));
            }
            let needed = required.entry(line.product_id).or_insert(0);
            *needed = needed
                .checked_add(line.quantity)
                .ok_or_else(|| StoreError::InvalidInput("quantity overflow".into()))?;
            if *needed > product.quantity {
                return Err(StoreError::InsufficientStock {
                    name: product.name.clone(),
                    requested: *needed,
                    available: product.quantity,
                });
            }
            total += product.price * f64::from(line.quantity);
        }

        // Pass 2: commit. Every product was checked above, so the decrements
        // cannot underflow.
        for (product_id, quantity) in required {
            if let Some(product) = self.products.get_mut(&product_id) {
                product.quantity -= quantity;
            }
        }

        let order = Order {
            id: self.next_order_id(),
            lines,
            total: round_to_cents(total),
            fulfillment,
            status: OrderStatus::Pending,
        };
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Looks up one order in the ledger.
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Sets an order's status. Every status is reachable from every other.
    pub fn set_order_status(
        &mut self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(StoreError::OrderNotFound(order_id))?;
        order.status = status;
        Ok(order.clone())
    }
}
