//! Order wire records.
//!
//! These mirror the store's row shapes. Statuses come back as plain strings
//! and are parsed explicitly so a row with a status outside the pipeline is
//! an error, not step zero.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tavola::{
    orders::{NewOrder, Order, OrderLine, OrderStatus},
    prices::Price,
};
use uuid::Uuid;

use crate::domain::orders::errors::OrdersServiceError;

/// Order header insert payload. Always written with status `pending`.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderRecord {
    pub owner_id: Uuid,
    pub restaurant_id: Uuid,
    pub status: OrderStatus,
    pub total: Price,
    pub delivery_address: String,
}

impl From<&NewOrder> for NewOrderRecord {
    fn from(order: &NewOrder) -> Self {
        NewOrderRecord {
            owner_id: order.owner_id,
            restaurant_id: order.restaurant_id,
            status: OrderStatus::Pending,
            total: order.total,
            delivery_address: order.delivery_address.clone(),
        }
    }
}

/// Order line insert payload, referencing the created header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRecord {
    pub order_id: Uuid,
    pub item_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl OrderLineRecord {
    pub fn new(order_id: Uuid, line: &OrderLine) -> Self {
        OrderLineRecord {
            order_id,
            item_id: line.item_id,
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// An order row as read back from the store, with its nested lines.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub restaurant_id: Uuid,
    pub status: String,
    pub total: Price,
    pub delivery_address: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub order_lines: Vec<OrderLineRecord>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrdersServiceError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let status: OrderStatus = record.status.parse()?;

        Ok(Order {
            id: record.id,
            owner_id: record.owner_id,
            restaurant_id: record.restaurant_id,
            lines: record
                .order_lines
                .into_iter()
                .map(|line| OrderLine {
                    item_id: line.item_id,
                    name: line.name,
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                })
                .collect(),
            status,
            total: record.total,
            delivery_address: record.delivery_address,
            created_at: record.created_at,
        })
    }
}
