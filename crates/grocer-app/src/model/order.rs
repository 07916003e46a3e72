//! Order ledger types.

use crate::store_actor::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::ProductId;

/// Type-safe identifier for orders. Unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One line of an order: a product and how many units of it were bought.
/// Immutable once the order exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// How the customer receives the order, chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMethod {
    Delivery,
    Pickup,
}

impl FulfillmentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }
}

impl Display for FulfillmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentMethod {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivery" => Ok(Self::Delivery),
            "pickup" => Ok(Self::Pickup),
            other => Err(StoreError::InvalidInput(format!(
                "unknown fulfillment method: {other}"
            ))),
        }
    }
}

/// Where an order sits in the store owner's queue.
///
/// Any status may be set from any other; there is no terminal state, so a
/// completed order can be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Ready,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Ready => "ready",
            Self::Completed => "completed",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            other => Err(StoreError::InvalidInput(format!(
                "unknown order status: {other}"
            ))),
        }
    }
}

/// A confirmed, stock-committed purchase awaiting fulfillment.
///
/// Created atomically by [`Store::place_order`](crate::model::Store::place_order)
/// with status [`OrderStatus::Pending`]; never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub fulfillment: FulfillmentMethod,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fulfillment_round_trips_through_str() {
        assert_eq!(
            "delivery".parse::<FulfillmentMethod>().unwrap(),
            FulfillmentMethod::Delivery
        );
        assert_eq!(FulfillmentMethod::Pickup.to_string(), "pickup");
        assert!("drone".parse::<FulfillmentMethod>().is_err());
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }
}
