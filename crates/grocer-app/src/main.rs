//! Demo binary: walks the customer flow (browse, cart, checkout) and the
//! store-owner flow (inventory edit, order queue) against the seeded stores.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin grocer
//! ```

use tracing::{error, info, Instrument};

use grocer_actor::tracing::setup_tracing;
use grocer_actor::ActorClient;
use grocer_app::checkout;
use grocer_app::lifecycle::GrocerySystem;
use grocer_app::model::{FulfillmentMethod, OrderStatus, ProductFields, ProductId};
use grocer_app::session::CartSession;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting grocery ordering system");

    let system = GrocerySystem::new();
    let store_ids = system.seed().await.map_err(|e| e.to_string())?;
    let store_id = store_ids[0];

    // Customer: pick the first store, fill a cart, check out for pickup.
    let mut session = CartSession::new();

    let span = tracing::info_span!("customer_flow");
    let order = async {
        let store = system
            .stores
            .get(store_id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or("seeded store missing")?;
        info!(store_name = %store.name, products = store.products.len(), "Browsing catalog");

        let mut product_ids: Vec<_> = store.products.keys().copied().collect();
        product_ids.sort();

        checkout::add_to_cart(&system.stores, &mut session, store_id, product_ids[0], 5)
            .await
            .map_err(|e| e.to_string())?;
        checkout::add_to_cart(&system.stores, &mut session, store_id, product_ids[1], 1)
            .await
            .map_err(|e| e.to_string())?;

        let view = checkout::cart_summary(&system.stores, &session, store_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            items = view.items.len(),
            total = view.total,
            "Cart ready for checkout"
        );

        checkout::checkout(
            &system.stores,
            &mut session,
            store_id,
            FulfillmentMethod::Pickup,
        )
        .await
        .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, total = order.total, status = %order.status, "Order confirmed");

    // Store owner: restock, then work the new order through the queue.
    let span = tracing::info_span!("store_owner_flow");
    async {
        let added = system
            .stores
            .add_product(
                store_id,
                ProductFields {
                    name: "Oat Milk (1 qt)".to_string(),
                    price: 3.29,
                    quantity: 25,
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id = %added.id, "Inventory updated");

        for status in [OrderStatus::Accepted, OrderStatus::Ready, OrderStatus::Completed] {
            let updated = system
                .stores
                .set_order_status(store_id, order.id, status)
                .await
                .map_err(|e| e.to_string())?;
            info!(order_id = %updated.id, status = %updated.status, "Order status updated");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // An order the shelf cannot cover is rejected and changes nothing.
    let mut greedy_session = CartSession::new();
    match checkout::add_to_cart(
        &system.stores,
        &mut greedy_session,
        store_id,
        ProductId(1),
        500,
    )
    .await
    {
        Ok(_) => error!("Oversized request unexpectedly accepted"),
        Err(e) => info!(error = %e, "Oversized request rejected as expected"),
    }

    system.shutdown().await?;

    info!("Done");
    Ok(())
}
