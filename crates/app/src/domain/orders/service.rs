//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tavola::{
    cart::{Cart, CartLine},
    orders::{NewOrder, Order, OrderStatus},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Session,
    domain::orders::{
        errors::OrdersServiceError,
        records::{NewOrderRecord, OrderLineRecord},
        repository::{OrdersRepository, RestOrdersRepository},
        tracking::OrderTracker,
    },
    store::StoreClient,
};

#[derive(Clone)]
pub struct StoreOrdersService {
    repository: Arc<dyn OrdersRepository>,
    tracker: OrderTracker,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(repository: Arc<dyn OrdersRepository>, tracker: OrderTracker) -> Self {
        Self {
            repository,
            tracker,
        }
    }

    /// Service backed by the store's REST interface.
    #[must_use]
    pub fn rest(store: StoreClient, tracker: OrderTracker) -> Self {
        Self::new(Arc::new(RestOrdersRepository::new(store)), tracker)
    }
}

impl std::fmt::Debug for StoreOrdersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOrdersService").finish_non_exhaustive()
    }
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    async fn place_order(
        &self,
        session: &Session,
        snapshot: Vec<CartLine>,
        restaurant_id: Uuid,
        delivery_address: &str,
    ) -> Result<Uuid, OrdersServiceError> {
        let order =
            NewOrder::from_snapshot(session.uid, restaurant_id, snapshot, delivery_address)?;

        let order_id = self
            .repository
            .create_order(&NewOrderRecord::from(&order))
            .await?;

        let lines: Vec<OrderLineRecord> = order
            .lines
            .iter()
            .map(|line| OrderLineRecord::new(order_id, line))
            .collect();

        // The header exists at this point; a line-write failure must surface
        // as an overall failure so the order is not considered placed.
        self.repository.create_order_lines(order_id, &lines).await?;

        info!(%order_id, total = *order.total, "order placed");

        Ok(order_id)
    }

    async fn list_orders(&self, owner: Uuid) -> Result<Vec<Order>, OrdersServiceError> {
        let records = self.repository.list_orders(owner).await?;

        records.into_iter().map(Order::try_from).collect()
    }

    async fn get_order(&self, id: Uuid) -> Result<Order, OrdersServiceError> {
        let record = self.repository.get_order(id).await?;

        Order::try_from(record)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<(), OrdersServiceError> {
        self.repository.update_status(id, status).await?;
        self.tracker.publish(id, status);

        info!(order_id = %id, %status, "order status updated");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a cart snapshot as a new order with status `pending`.
    ///
    /// Writes the order header, then one row per line; a failure on either
    /// write propagates and the order must not be treated as placed.
    async fn place_order(
        &self,
        session: &Session,
        snapshot: Vec<CartLine>,
        restaurant_id: Uuid,
        delivery_address: &str,
    ) -> Result<Uuid, OrdersServiceError>;

    /// All orders owned by `owner`, newest first.
    async fn list_orders(&self, owner: Uuid) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order with its lines.
    async fn get_order(&self, id: Uuid) -> Result<Order, OrdersServiceError>;

    /// Apply an externally driven status transition and notify watchers.
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), OrdersServiceError>;
}

/// Convert the cart's contents into a placed order.
///
/// The submission reads a snapshot taken before the call, and the cart is
/// cleared only after the order is fully persisted. On any failure the cart
/// is left intact so the user can retry.
///
/// # Errors
///
/// Returns [`OrdersServiceError::Unauthenticated`] without touching the
/// store when there is no session, and propagates any submission failure.
pub async fn checkout(
    cart: &mut Cart,
    session: Option<&Session>,
    restaurant_id: Uuid,
    delivery_address: &str,
    orders: &dyn OrdersService,
) -> Result<Uuid, OrdersServiceError> {
    let session = session.ok_or(OrdersServiceError::Unauthenticated)?;

    let order_id = orders
        .place_order(session, cart.snapshot(), restaurant_id, delivery_address)
        .await?;

    cart.clear();

    Ok(order_id)
}
