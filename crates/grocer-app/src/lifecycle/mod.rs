//! # System Lifecycle
//!
//! Starts the store registry actor, optionally seeds the demo catalog, and
//! coordinates graceful shutdown. Actors are created first and wired by
//! handing clients around; shutdown works by dropping every client so each
//! actor sees its channel close and drains out.

use tracing::{error, info};

use crate::clients::StoreClient;
use crate::model::{ProductFields, StoreCreate, StoreId};
use crate::store_actor::{self, StoreError};

/// The demo catalog: three stores, three products each.
const SEED_STORES: &[(&str, &[(&str, f64, u32)])] = &[
    (
        "Sunnyvale Fresh Mart",
        &[
            ("Bananas", 0.69, 100),
            ("Milk (1 gal)", 4.49, 30),
            ("Eggs (dozen)", 3.99, 40),
        ],
    ),
    (
        "Neighborhood Grocers",
        &[
            ("Apples (lb)", 1.29, 80),
            ("Bread", 3.49, 50),
            ("Rice (5 lb)", 7.99, 20),
        ],
    ),
    (
        "Organic Corner",
        &[
            ("Avocados", 1.99, 60),
            ("Greek Yogurt", 1.49, 45),
            ("Spinach", 2.99, 35),
        ],
    ),
];

/// Runtime handle for the whole ordering system.
///
/// ```rust,ignore
/// let system = GrocerySystem::new();
/// let store_ids = system.seed().await?;
/// // ... customer and store-owner flows through system.stores ...
/// system.shutdown().await?;
/// ```
pub struct GrocerySystem {
    /// Client for the store registry actor.
    pub stores: StoreClient,

    /// Handles of the running actor tasks, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl GrocerySystem {
    /// Creates the system with the store registry actor running.
    pub fn new() -> Self {
        let (store_actor, generic_client) = store_actor::new();
        let stores = StoreClient::new(generic_client);
        let store_handle = tokio::spawn(store_actor.run(()));

        Self {
            stores,
            handles: vec![store_handle],
        }
    }

    /// Seeds the demo stores and returns their ids in seed order.
    pub async fn seed(&self) -> Result<Vec<StoreId>, StoreError> {
        let mut ids = Vec::with_capacity(SEED_STORES.len());
        for (store_name, products) in SEED_STORES {
            let store_id = self
                .stores
                .create_store(StoreCreate {
                    name: (*store_name).to_string(),
                })
                .await?;
            for (name, price, quantity) in *products {
                self.stores
                    .add_product(
                        store_id,
                        ProductFields {
                            name: (*name).to_string(),
                            price: *price,
                            quantity: *quantity,
                        },
                    )
                    .await?;
            }
            info!(%store_id, store_name = *store_name, "Seeded store");
            ids.push(store_id);
        }
        Ok(ids)
    }

    /// Shuts the system down: drops the clients to close the mailboxes, then
    /// waits for every actor to finish draining.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.stores);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for GrocerySystem {
    fn default() -> Self {
        Self::new()
    }
}
