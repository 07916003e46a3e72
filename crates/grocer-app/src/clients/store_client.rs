//! # Store Client
//!
//! The typed API over the store registry actor. Wraps a
//! `ResourceClient<Store>`, names each domain operation, and unwraps the
//! matching [`StoreActionResult`] variant so callers never touch the message
//! enums.

use async_trait::async_trait;
use grocer_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

use crate::model::{
    FulfillmentMethod, Order, OrderId, OrderLine, OrderStatus, Product, ProductFields, ProductId,
    Store, StoreCreate, StoreId,
};
use crate::store_actor::{StoreAction, StoreActionResult, StoreError};

/// Client for the store registry actor.
///
/// Cheap to clone; hand a clone to every task that needs store access.
/// `get` and `delete` come from [`ActorClient`].
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient<Store>,
}

impl StoreClient {
    pub fn new(inner: ResourceClient<Store>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Store> for StoreClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Store> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from_framework(e)
    }
}

impl StoreClient {
    /// Registers a new store and returns its id.
    #[instrument(skip(self))]
    pub async fn create_store(&self, params: StoreCreate) -> Result<StoreId, StoreError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(StoreError::from_framework)
    }

    /// Renames a store.
    #[instrument(skip(self))]
    pub async fn rename_store(&self, store_id: StoreId, name: String) -> Result<Store, StoreError> {
        debug!("Sending request");
        self.inner
            .update(store_id, crate::model::StoreUpdate { name: Some(name) })
            .await
            .map_err(StoreError::from_framework)
    }

    /// Adds a product to a store's catalog.
    #[instrument(skip(self, fields))]
    pub async fn add_product(
        &self,
        store_id: StoreId,
        fields: ProductFields,
    ) -> Result<Product, StoreError> {
        debug!("Sending request");
        match self.perform(store_id, StoreAction::AddProduct(fields)).await? {
            StoreActionResult::AddProduct(product) => Ok(product),
            _ => unreachable!("AddProduct action must return AddProduct result"),
        }
    }

    /// Replaces a listing's fields. Returns `None` when the product id does
    /// not exist (the catalog is left unchanged).
    #[instrument(skip(self, fields))]
    pub async fn update_product(
        &self,
        store_id: StoreId,
        product_id: ProductId,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        debug!("Sending request");
        match self
            .perform(store_id, StoreAction::UpdateProduct { product_id, fields })
            .await?
        {
            StoreActionResult::UpdateProduct(product) => Ok(product),
            _ => unreachable!("UpdateProduct action must return UpdateProduct result"),
        }
    }

    /// Removes a listing; removing an unknown id is a no-op.
    #[instrument(skip(self))]
    pub async fn delete_product(
        &self,
        store_id: StoreId,
        product_id: ProductId,
    ) -> Result<(), StoreError> {
        debug!("Sending request");
        match self
            .perform(store_id, StoreAction::DeleteProduct(product_id))
            .await?
        {
            StoreActionResult::DeleteProduct(()) => Ok(()),
            _ => unreachable!("DeleteProduct action must return DeleteProduct result"),
        }
    }

    /// Places an order against a store's stock.
    #[instrument(skip(self, lines))]
    pub async fn place_order(
        &self,
        store_id: StoreId,
        lines: Vec<OrderLine>,
        fulfillment: FulfillmentMethod,
    ) -> Result<Order, StoreError> {
        debug!(line_count = lines.len(), "Sending request");
        match self
            .perform(store_id, StoreAction::PlaceOrder { lines, fulfillment })
            .await?
        {
            StoreActionResult::PlaceOrder(order) => Ok(order),
            _ => unreachable!("PlaceOrder action must return PlaceOrder result"),
        }
    }

    /// Fetches one order from a store's ledger.
    #[instrument(skip(self))]
    pub async fn order(
        &self,
        store_id: StoreId,
        order_id: OrderId,
    ) -> Result<Option<Order>, StoreError> {
        debug!("Sending request");
        match self.perform(store_id, StoreAction::GetOrder(order_id)).await? {
            StoreActionResult::GetOrder(order) => Ok(order),
            _ => unreachable!("GetOrder action must return GetOrder result"),
        }
    }

    /// Sets an order's status; any status is reachable from any other.
    #[instrument(skip(self))]
    pub async fn set_order_status(
        &self,
        store_id: StoreId,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        debug!("Sending request");
        match self
            .perform(store_id, StoreAction::SetOrderStatus { order_id, status })
            .await?
        {
            StoreActionResult::SetOrderStatus(order) => Ok(order),
            _ => unreachable!("SetOrderStatus action must return SetOrderStatus result"),
        }
    }

    async fn perform(
        &self,
        store_id: StoreId,
        action: StoreAction,
    ) -> Result<StoreActionResult, StoreError> {
        self.inner
            .perform_action(store_id, action)
            .await
            .map_err(StoreError::from_framework)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use grocer_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn place_order_unwraps_the_order_result() {
        let (client, mut receiver) = create_mock_client::<Store>(10);
        let stores = StoreClient::new(client);

        let place_task = tokio::spawn(async move {
            stores
                .place_order(
                    StoreId(1),
                    vec![OrderLine::new(ProductId(1), 5)],
                    FulfillmentMethod::Pickup,
                )
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, StoreId(1));
        let lines = match action {
            StoreAction::PlaceOrder { lines, fulfillment } => {
                assert_eq!(fulfillment, FulfillmentMethod::Pickup);
                lines
            }
            other => panic!("Expected PlaceOrder action, got {other:?}"),
        };

        responder
            .send(Ok(StoreActionResult::PlaceOrder(Order {
                id: OrderId(1),
                lines,
                total: 3.45,
                fulfillment: FulfillmentMethod::Pickup,
                status: OrderStatus::Pending,
            })))
            .unwrap();

        let order = place_task.await.unwrap().unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.total, 3.45);
    }

    #[tokio::test]
    async fn entity_errors_come_back_as_their_original_variant() {
        let (client, mut receiver) = create_mock_client::<Store>(10);
        let stores = StoreClient::new(client);

        let place_task = tokio::spawn(async move {
            stores
                .place_order(
                    StoreId(1),
                    vec![OrderLine::new(ProductId(1), 200)],
                    FulfillmentMethod::Delivery,
                )
                .await
        });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                StoreError::InsufficientStock {
                    name: "Bananas".into(),
                    requested: 200,
                    available: 100,
                },
            ))))
            .unwrap();

        let result = place_task.await.unwrap();
        assert_eq!(
            result,
            Err(StoreError::InsufficientStock {
                name: "Bananas".into(),
                requested: 200,
                available: 100,
            })
        );
    }

    #[tokio::test]
    async fn missing_store_maps_to_store_not_found() {
        let (client, mut receiver) = create_mock_client::<Store>(10);
        let stores = StoreClient::new(client);

        let delete_task =
            tokio::spawn(async move { stores.delete_product(StoreId(9), ProductId(1)).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::NotFound("store_9".into())))
            .unwrap();

        let result = delete_task.await.unwrap();
        assert_eq!(result, Err(StoreError::StoreNotFound("store_9".into())));
    }
}
