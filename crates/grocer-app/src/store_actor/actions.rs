//! Domain actions on a store, beyond plain CRUD.
//!
//! Catalog edits, order placement, and status updates all address one store
//! by id and run inside that store's actor, one at a time. Result variants
//! match actions 1:1.

use crate::model::{
    FulfillmentMethod, Order, OrderId, OrderLine, OrderStatus, Product, ProductFields, ProductId,
};

/// Operations on one store's catalog and order ledger.
#[derive(Debug, Clone)]
pub enum StoreAction {
    /// Add a product under the next free id.
    AddProduct(ProductFields),
    /// Replace an existing listing's fields. Unknown ids are a silent no-op.
    UpdateProduct {
        product_id: ProductId,
        fields: ProductFields,
    },
    /// Remove a listing if present.
    DeleteProduct(ProductId),
    /// Validate a cart's lines against stock, commit, and append an order.
    PlaceOrder {
        lines: Vec<OrderLine>,
        fulfillment: FulfillmentMethod,
    },
    /// Fetch one order from the ledger.
    GetOrder(OrderId),
    /// Move an order to any of the four statuses.
    SetOrderStatus {
        order_id: OrderId,
        status: OrderStatus,
    },
}

/// Results from [`StoreAction`]s - variants match 1:1 with the actions.
#[derive(Debug, Clone)]
pub enum StoreActionResult {
    AddProduct(Product),
    /// `None` when the product id did not exist.
    UpdateProduct(Option<Product>),
    DeleteProduct(()),
    PlaceOrder(Order),
    GetOrder(Option<Order>),
    SetOrderStatus(Order),
}
