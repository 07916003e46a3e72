//! # Customer Flow
//!
//! Coordinates the cart session with the store registry: accumulate items
//! with stock checks, summarize the cart against the live catalog, and turn
//! the cart into an order.
//!
//! All stock checks here read a catalog snapshot, so they can race a
//! concurrent checkout. That is fine: they exist to give the customer early
//! feedback, and [`checkout`] relies on the store actor's own validation for
//! the decision that counts.

use tracing::{info, instrument};

use grocer_actor::ActorClient;

use crate::clients::StoreClient;
use crate::model::{round_to_cents, FulfillmentMethod, Order, Product, ProductId, Store, StoreId};
use crate::session::CartSession;
use crate::store_actor::StoreError;

/// A cart resolved against the current catalog, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Products still in the catalog, paired with the held quantity.
    /// Entries for products deleted since they were added are skipped.
    pub items: Vec<(Product, u32)>,
    /// Running total over `items`, rounded to cents.
    pub total: f64,
}

async fn fetch_store(stores: &StoreClient, store_id: StoreId) -> Result<Store, StoreError> {
    stores
        .get(store_id)
        .await?
        .ok_or_else(|| StoreError::StoreNotFound(store_id.to_string()))
}

/// Adds `quantity` units of a product to the customer's cart for `store_id`.
///
/// Rejects a zero quantity, an unknown product, and a request beyond current
/// stock. The merged cart quantity is capped at current stock, so repeatedly
/// adding an in-stock amount can never build an uncoverable cart. Returns the
/// units held after the merge.
#[instrument(skip(stores, session))]
pub async fn add_to_cart(
    stores: &StoreClient,
    session: &mut CartSession,
    store_id: StoreId,
    product_id: ProductId,
    quantity: u32,
) -> Result<u32, StoreError> {
    if quantity == 0 {
        return Err(StoreError::InvalidQuantity(quantity));
    }

    let store = fetch_store(stores, store_id).await?;
    let product = store
        .products
        .get(&product_id)
        .ok_or(StoreError::ProductNotFound(product_id))?;

    if quantity > product.quantity {
        return Err(StoreError::InsufficientStock {
            name: product.name.clone(),
            requested: quantity,
            available: product.quantity,
        });
    }

    let cart = session.cart_mut(store_id);
    let mut held = cart.add(product_id, quantity);
    if held > product.quantity {
        cart.set_quantity(product_id, product.quantity);
        held = product.quantity;
    }

    info!(%store_id, %product_id, held, "Added to cart");
    Ok(held)
}

/// Resolves the cart for `store_id` against the live catalog.
#[instrument(skip(stores, session))]
pub async fn cart_summary(
    stores: &StoreClient,
    session: &CartSession,
    store_id: StoreId,
) -> Result<CartView, StoreError> {
    let store = fetch_store(stores, store_id).await?;

    let mut items = Vec::new();
    let mut total = 0.0;
    if let Some(cart) = session.cart(store_id) {
        for &(product_id, quantity) in cart.lines() {
            if quantity == 0 {
                continue;
            }
            if let Some(product) = store.products.get(&product_id) {
                total += product.price * f64::from(quantity);
                items.push((product.clone(), quantity));
            }
        }
    }

    Ok(CartView {
        items,
        total: round_to_cents(total),
    })
}

/// Turns the cart for `store_id` into an order.
///
/// Fails on an empty cart. The cart is cleared only after the store accepts
/// the order; on any failure it is left exactly as it was so the customer can
/// adjust and retry.
#[instrument(skip(stores, session))]
pub async fn checkout(
    stores: &StoreClient,
    session: &mut CartSession,
    store_id: StoreId,
    fulfillment: FulfillmentMethod,
) -> Result<Order, StoreError> {
    let lines = session
        .cart(store_id)
        .map(|cart| cart.order_lines())
        .unwrap_or_default();
    if lines.is_empty() {
        return Err(StoreError::InvalidInput("cart is empty".into()));
    }

    let order = stores.place_order(store_id, lines, fulfillment).await?;
    session.clear(store_id);

    info!(%store_id, order_id = %order.id, total = order.total, "Order placed");
    Ok(order)
}
