//! Order status tracking.
//!
//! In-process pub/sub keyed by order id. A subscription lives exactly as
//! long as its [`OrderWatch`] handle: dropping the handle tears the
//! registration down once, so a watcher registered for an order can never
//! leak past the end of its visible lifetime.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use tavola::orders::OrderStatus;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of each per-order broadcast channel. Status transitions are rare
/// (five per order), so a small buffer suffices.
const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug)]
struct Channel {
    sender: broadcast::Sender<OrderStatus>,
    subscribers: usize,
}

/// Registry of live order-status subscriptions.
#[derive(Debug, Clone, Default)]
pub struct OrderTracker {
    channels: Arc<Mutex<FxHashMap<Uuid, Channel>>>,
}

impl OrderTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `order_id`.
    ///
    /// The returned handle receives every status published for that order
    /// until it is dropped.
    pub fn subscribe(&self, order_id: Uuid) -> OrderWatch {
        let mut channels = self.lock();

        let channel = channels.entry(order_id).or_insert_with(|| Channel {
            sender: broadcast::channel(CHANNEL_CAPACITY).0,
            subscribers: 0,
        });

        channel.subscribers += 1;
        let receiver = channel.sender.subscribe();

        OrderWatch {
            tracker: self.clone(),
            order_id,
            receiver,
        }
    }

    /// Publish a status change for `order_id` to its live subscribers.
    ///
    /// Publishing with no subscribers is a no-op.
    pub fn publish(&self, order_id: Uuid, status: OrderStatus) {
        let channels = self.lock();

        if let Some(channel) = channels.get(&order_id) {
            // Send only fails when every receiver is gone, which just means
            // the last watcher dropped between lookup and send.
            _ = channel.sender.send(status);
        }
    }

    /// Number of orders currently being tracked.
    pub fn tracked_orders(&self) -> usize {
        self.lock().len()
    }

    fn unsubscribe(&self, order_id: Uuid) {
        let mut channels = self.lock();

        if let Some(channel) = channels.get_mut(&order_id) {
            channel.subscribers -= 1;

            if channel.subscribers == 0 {
                channels.remove(&order_id);
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<Uuid, Channel>> {
        self.channels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// A live subscription to one order's status changes.
#[derive(Debug)]
pub struct OrderWatch {
    tracker: OrderTracker,
    order_id: Uuid,
    receiver: broadcast::Receiver<OrderStatus>,
}

impl OrderWatch {
    /// The order this handle is watching.
    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    /// Wait for the next status change.
    ///
    /// Returns `None` once the channel is closed. A lagged receiver skips to
    /// the oldest retained status rather than erroring out.
    pub async fn next(&mut self) -> Option<OrderStatus> {
        loop {
            match self.receiver.recv().await {
                Ok(status) => return Some(status),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
            }
        }
    }
}

impl Drop for OrderWatch {
    fn drop(&mut self) {
        self.tracker.unsubscribe(self.order_id);
    }
}
