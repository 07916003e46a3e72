//! [`ActorEntity`] implementation for [`Store`].
//!
//! The framework handles store-level CRUD; every catalog and ledger mutation
//! arrives as a [`StoreAction`] and is delegated to the corresponding
//! [`Store`] method. Because the actor processes one message at a time, the
//! multi-step order placement is atomic with respect to every other request
//! against the registry.

use async_trait::async_trait;
use grocer_actor::ActorEntity;

use super::actions::{StoreAction, StoreActionResult};
use super::error::StoreError;
use crate::model::{Store, StoreCreate, StoreId, StoreUpdate};

#[async_trait]
impl ActorEntity for Store {
    type Id = StoreId;
    type Create = StoreCreate;
    type Update = StoreUpdate;
    type Action = StoreAction;
    type ActionResult = StoreActionResult;
    type Context = ();
    type Error = StoreError;

    fn from_create_params(id: StoreId, params: StoreCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(StoreError::InvalidInput("store name is required".into()));
        }
        Ok(Store::new(id, params.name))
    }

    async fn on_update(
        &mut self,
        update: StoreUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(StoreError::InvalidInput("store name is required".into()));
            }
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StoreAction,
        _ctx: &Self::Context,
    ) -> Result<StoreActionResult, Self::Error> {
        match action {
            StoreAction::AddProduct(fields) => {
                Ok(StoreActionResult::AddProduct(self.add_product(fields)?))
            }
            StoreAction::UpdateProduct { product_id, fields } => Ok(
                StoreActionResult::UpdateProduct(self.update_product(product_id, fields)?),
            ),
            StoreAction::DeleteProduct(product_id) => {
                self.delete_product(product_id);
                Ok(StoreActionResult::DeleteProduct(()))
            }
            StoreAction::PlaceOrder { lines, fulfillment } => Ok(StoreActionResult::PlaceOrder(
                self.place_order(lines, fulfillment)?,
            )),
            StoreAction::GetOrder(order_id) => {
                Ok(StoreActionResult::GetOrder(self.order(order_id).cloned()))
            }
            StoreAction::SetOrderStatus { order_id, status } => Ok(
                StoreActionResult::SetOrderStatus(self.set_order_status(order_id, status)?),
            ),
        }
    }
}
