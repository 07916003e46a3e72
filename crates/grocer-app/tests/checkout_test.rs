use grocer_actor::ActorClient;
use grocer_app::checkout::{add_to_cart, cart_summary, checkout};
use grocer_app::lifecycle::GrocerySystem;
use grocer_app::model::{FulfillmentMethod, OrderStatus, ProductFields, ProductId, StoreId};
use grocer_app::session::CartSession;
use grocer_app::store_actor::StoreError;

// Seed order puts Bananas (0.69 x 100) at id 1 and Milk (4.49 x 30) at id 2
// in the first store.
const BANANAS: ProductId = ProductId(1);
const MILK: ProductId = ProductId(2);

async fn seeded_system() -> (GrocerySystem, StoreId) {
    let system = GrocerySystem::new();
    let store_ids = system.seed().await.expect("Failed to seed stores");
    (system, store_ids[0])
}

#[tokio::test]
async fn cart_accumulates_and_checks_out() {
    let (system, store_id) = seeded_system().await;
    let mut session = CartSession::new();

    let held = add_to_cart(&system.stores, &mut session, store_id, BANANAS, 5)
        .await
        .expect("Failed to add bananas");
    assert_eq!(held, 5);
    let held = add_to_cart(&system.stores, &mut session, store_id, MILK, 1)
        .await
        .expect("Failed to add milk");
    assert_eq!(held, 1);
    assert_eq!(session.item_count(store_id), 6);

    let view = cart_summary(&system.stores, &session, store_id)
        .await
        .expect("Failed to summarize cart");
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.total, 7.94);

    let order = checkout(
        &system.stores,
        &mut session,
        store_id,
        FulfillmentMethod::Pickup,
    )
    .await
    .expect("Checkout failed");

    assert_eq!(order.total, 7.94);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.lines.len(), 2);

    // The cart is spent once the order is committed.
    assert_eq!(session.item_count(store_id), 0);

    let store = system
        .stores
        .get(store_id)
        .await
        .expect("Failed to get store")
        .expect("Store not found");
    assert_eq!(store.products[&BANANAS].quantity, 95);
    assert_eq!(store.products[&MILK].quantity, 29);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn add_to_cart_validates_against_the_live_catalog() {
    let (system, store_id) = seeded_system().await;
    let mut session = CartSession::new();

    let zero = add_to_cart(&system.stores, &mut session, store_id, BANANAS, 0).await;
    assert_eq!(zero, Err(StoreError::InvalidQuantity(0)));

    let ghost = add_to_cart(&system.stores, &mut session, store_id, ProductId(42), 1).await;
    assert_eq!(ghost, Err(StoreError::ProductNotFound(ProductId(42))));

    let greedy = add_to_cart(&system.stores, &mut session, store_id, MILK, 31).await;
    assert_eq!(
        greedy,
        Err(StoreError::InsufficientStock {
            name: "Milk (1 gal)".into(),
            requested: 31,
            available: 30,
        })
    );

    // Nothing landed in the cart.
    assert_eq!(session.item_count(store_id), 0);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn cart_quantity_is_capped_at_stock() {
    let (system, store_id) = seeded_system().await;
    let mut session = CartSession::new();

    // 20 + 20 would exceed the 30 in stock; the second add caps the cart.
    let held = add_to_cart(&system.stores, &mut session, store_id, MILK, 20)
        .await
        .expect("Failed to add milk");
    assert_eq!(held, 20);
    let held = add_to_cart(&system.stores, &mut session, store_id, MILK, 20)
        .await
        .expect("Capped add must succeed");
    assert_eq!(held, 30);
    assert_eq!(session.item_count(store_id), 30);

    // The capped cart checks out cleanly.
    let order = checkout(
        &system.stores,
        &mut session,
        store_id,
        FulfillmentMethod::Delivery,
    )
    .await
    .expect("Checkout failed");
    assert_eq!(order.total, 134.7);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn failed_checkout_keeps_the_cart() {
    let (system, store_id) = seeded_system().await;
    let mut session = CartSession::new();

    add_to_cart(&system.stores, &mut session, store_id, MILK, 5)
        .await
        .expect("Failed to add milk");

    // The owner sells down the shelf behind the customer's back.
    system
        .stores
        .update_product(
            store_id,
            MILK,
            ProductFields {
                name: "Milk (1 gal)".into(),
                price: 4.49,
                quantity: 2,
            },
        )
        .await
        .expect("Failed to update product");

    let result = checkout(
        &system.stores,
        &mut session,
        store_id,
        FulfillmentMethod::Pickup,
    )
    .await;
    assert!(matches!(
        result,
        Err(StoreError::InsufficientStock { .. })
    ));

    // Cart intact: the customer can adjust and retry.
    assert_eq!(session.item_count(store_id), 5);
    session.cart_mut(store_id).set_quantity(MILK, 2);

    let order = checkout(
        &system.stores,
        &mut session,
        store_id,
        FulfillmentMethod::Pickup,
    )
    .await
    .expect("Retry checkout failed");
    assert_eq!(order.total, 8.98);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
    let (system, store_id) = seeded_system().await;
    let mut session = CartSession::new();

    let result = checkout(
        &system.stores,
        &mut session,
        store_id,
        FulfillmentMethod::Pickup,
    )
    .await;
    assert!(matches!(result, Err(StoreError::InvalidInput(_))));

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn cart_summary_skips_products_deleted_after_adding() {
    let (system, store_id) = seeded_system().await;
    let mut session = CartSession::new();

    add_to_cart(&system.stores, &mut session, store_id, BANANAS, 5)
        .await
        .expect("Failed to add bananas");
    add_to_cart(&system.stores, &mut session, store_id, MILK, 1)
        .await
        .expect("Failed to add milk");

    system
        .stores
        .delete_product(store_id, MILK)
        .await
        .expect("Failed to delete product");

    let view = cart_summary(&system.stores, &session, store_id)
        .await
        .expect("Failed to summarize cart");
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].0.name, "Bananas");
    assert_eq!(view.total, 3.45);

    system.shutdown().await.expect("Failed to shutdown system");
}
