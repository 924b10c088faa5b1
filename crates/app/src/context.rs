//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, RestAuthService},
    config::AppConfig,
    domain::{
        addresses::{AddressesService, StoreAddressesService},
        orders::{OrderTracker, OrdersService, StoreOrdersService},
        restaurants::{RestaurantsService, StoreRestaurantsService},
    },
    store::StoreClient,
};

/// Service handles for one active session.
///
/// Built once per session and passed to the views that need it; there is no
/// module-level singleton.
#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub orders: Arc<dyn OrdersService>,
    pub restaurants: Arc<dyn RestaurantsService>,
    pub addresses: Arc<dyn AddressesService>,
    pub tracker: OrderTracker,
}

impl AppContext {
    /// Build the application context from loaded configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let store = StoreClient::new((&config.store).into());
        let tracker = OrderTracker::new();

        Self {
            auth: Arc::new(RestAuthService::new((&config.auth).into())),
            orders: Arc::new(StoreOrdersService::rest(store.clone(), tracker.clone())),
            restaurants: Arc::new(StoreRestaurantsService::rest(store.clone())),
            addresses: Arc::new(StoreAddressesService::rest(store)),
            tracker,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
