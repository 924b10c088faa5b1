//! Orders
//!
//! An order is created once at checkout from a snapshot of the cart and is
//! only mutated afterwards by status transitions driven by external actors
//! (restaurant, rider, admin). The status pipeline is fixed and strictly
//! ordered.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{cart::CartLine, prices::Price};

/// Number of steps in the fulfilment pipeline.
const PIPELINE_STEPS: usize = 5;

/// A fulfilment status in the fixed order pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Delivering,
    Delivered,
}

/// A status string outside the enumerated pipeline.
///
/// Unknown statuses are an explicit error rather than being silently treated
/// as the first pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatusError(pub String);

/// Position of a status within the pipeline, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index into the pipeline.
    pub step_index: usize,

    /// Completion percentage: `(step_index + 1) / 5 × 100`.
    pub percent: u8,
}

impl OrderStatus {
    /// The pipeline position of this status.
    ///
    /// Pure and total over the five known statuses.
    pub fn progress(self) -> Progress {
        let step_index = match self {
            OrderStatus::Pending => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Delivering => 3,
            OrderStatus::Delivered => 4,
        };

        Progress {
            step_index,
            percent: ((step_index + 1) * 100 / PIPELINE_STEPS) as u8,
        }
    }

    /// Whether the order has reached the end of the pipeline.
    pub fn is_delivered(self) -> bool {
        self == OrderStatus::Delivered
    }

    fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "delivering" => Ok(OrderStatus::Delivering),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(UnknownStatusError(other.to_string())),
        }
    }
}

/// One line of a placed order: a by-value copy of a cart line at checkout
/// time. Later menu price changes never alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: Uuid,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl From<CartLine> for OrderLine {
    fn from(line: CartLine) -> Self {
        OrderLine {
            item_id: line.item_id,
            name: line.name,
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

/// A persisted order as read back from the store.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub restaurant_id: Uuid,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total: Price,
    pub delivery_address: String,
    pub created_at: Timestamp,
}

/// Errors building an order from a cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    /// The snapshot had no lines.
    #[error("order has no lines")]
    Empty,
}

/// A not-yet-persisted order, built from a cart snapshot at checkout.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub owner_id: Uuid,
    pub restaurant_id: Uuid,
    pub lines: Vec<OrderLine>,
    pub total: Price,
    pub delivery_address: String,
}

impl NewOrder {
    /// Build a new order from a cart snapshot.
    ///
    /// The total is computed from the snapshot itself, never re-read from a
    /// live cart, so a concurrent cart edit cannot change what is submitted.
    ///
    /// # Errors
    ///
    /// Returns [`OrderValidationError::Empty`] when the snapshot has no lines.
    pub fn from_snapshot(
        owner_id: Uuid,
        restaurant_id: Uuid,
        snapshot: Vec<CartLine>,
        delivery_address: impl Into<String>,
    ) -> Result<Self, OrderValidationError> {
        if snapshot.is_empty() {
            return Err(OrderValidationError::Empty);
        }

        let lines: Vec<OrderLine> = snapshot.into_iter().map(OrderLine::from).collect();

        let total = lines
            .iter()
            .map(|line| line.unit_price.line_total(line.quantity))
            .sum();

        Ok(NewOrder {
            owner_id,
            restaurant_id,
            lines,
            total,
            delivery_address: delivery_address.into(),
        })
    }
}
