//! Orders Repository

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use tavola::orders::OrderStatus;
use uuid::Uuid;

use crate::{
    domain::orders::records::{NewOrderRecord, OrderLineRecord, OrderRecord},
    store::{StoreClient, StoreError},
};

const ORDERS_TABLE: &str = "orders";
const ORDER_LINES_TABLE: &str = "order_lines";

/// Persistence operations for orders.
///
/// The header write and the line writes are two dependent calls; callers must
/// treat them as one logical transaction and propagate a line-write failure
/// as an overall failure.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Insert the order header and return the new order id.
    async fn create_order(&self, order: &NewOrderRecord) -> Result<Uuid, StoreError>;

    /// Insert one row per order line, referencing the created header.
    async fn create_order_lines(
        &self,
        order: Uuid,
        lines: &[OrderLineRecord],
    ) -> Result<(), StoreError>;

    /// Fetch one order with its nested lines.
    async fn get_order(&self, id: Uuid) -> Result<OrderRecord, StoreError>;

    /// Fetch all orders owned by `owner`, newest first.
    async fn list_orders(&self, owner: Uuid) -> Result<Vec<OrderRecord>, StoreError>;

    /// Update the status column of one order.
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct RestOrdersRepository {
    store: StoreClient,
}

#[derive(Debug, Deserialize)]
struct CreatedRow {
    id: Uuid,
}

impl RestOrdersRepository {
    #[must_use]
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrdersRepository for RestOrdersRepository {
    async fn create_order(&self, order: &NewOrderRecord) -> Result<Uuid, StoreError> {
        let created: Vec<CreatedRow> = self.store.insert(ORDERS_TABLE, &[order]).await?;

        created
            .first()
            .map(|row| row.id)
            .ok_or_else(|| {
                StoreError::UnexpectedResponse(
                    "order insert returned no representation".to_string(),
                )
            })
    }

    async fn create_order_lines(
        &self,
        _order: Uuid,
        lines: &[OrderLineRecord],
    ) -> Result<(), StoreError> {
        // Line rows already carry their order_id; the insert is one batch.
        let _created: Vec<OrderLineRecord> = self.store.insert(ORDER_LINES_TABLE, lines).await?;

        Ok(())
    }

    async fn get_order(&self, id: Uuid) -> Result<OrderRecord, StoreError> {
        let rows: Vec<OrderRecord> = self
            .store
            .select(
                ORDERS_TABLE,
                &[
                    ("id", format!("eq.{id}")),
                    ("select", "*,order_lines(*)".to_string()),
                ],
            )
            .await?;

        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn list_orders(&self, owner: Uuid) -> Result<Vec<OrderRecord>, StoreError> {
        self.store
            .select(
                ORDERS_TABLE,
                &[
                    ("owner_id", format!("eq.{owner}")),
                    ("select", "*,order_lines(*)".to_string()),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), StoreError> {
        self.store
            .update(
                ORDERS_TABLE,
                &[("id", format!("eq.{id}"))],
                &serde_json::json!({ "status": status }),
            )
            .await
    }
}
