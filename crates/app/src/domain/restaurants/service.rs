//! Restaurants service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tavola::menu::Restaurant;
use uuid::Uuid;

use crate::{
    domain::restaurants::{
        errors::RestaurantsServiceError,
        models::{SearchHit, SearchKind},
        repository::{RestRestaurantsRepository, RestaurantsRepository},
    },
    store::StoreClient,
};

/// Matches fetched per table for one search.
const SEARCH_LIMIT: usize = 5;

#[derive(Clone)]
pub struct StoreRestaurantsService {
    repository: Arc<dyn RestaurantsRepository>,
}

impl StoreRestaurantsService {
    #[must_use]
    pub fn new(repository: Arc<dyn RestaurantsRepository>) -> Self {
        Self { repository }
    }

    /// Service backed by the store's REST interface.
    #[must_use]
    pub fn rest(store: StoreClient) -> Self {
        Self::new(Arc::new(RestRestaurantsRepository::new(store)))
    }
}

impl std::fmt::Debug for StoreRestaurantsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRestaurantsService")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RestaurantsService for StoreRestaurantsService {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestaurantsServiceError> {
        Ok(self.repository.list_restaurants().await?)
    }

    async fn get_restaurant(&self, id: Uuid) -> Result<Restaurant, RestaurantsServiceError> {
        Ok(self.repository.get_restaurant(id).await?)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, RestaurantsServiceError> {
        let query = query.trim();

        // A blank query never reaches the store.
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let (restaurants, dishes) = tokio::try_join!(
            self.repository.search_restaurants(query, SEARCH_LIMIT),
            self.repository.search_menu_items(query, SEARCH_LIMIT),
        )?;

        Ok(restaurants
            .into_iter()
            .map(|row| row.hit(SearchKind::Restaurant))
            .chain(dishes.into_iter().map(|row| row.hit(SearchKind::Dish)))
            .collect())
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsService: Send + Sync {
    /// Retrieves all restaurants with their menus.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestaurantsServiceError>;

    /// Retrieve a single restaurant with its menu.
    async fn get_restaurant(&self, id: Uuid) -> Result<Restaurant, RestaurantsServiceError>;

    /// Case-insensitive name search across restaurants and menu items, up to
    /// five matches per kind, restaurants listed first.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, RestaurantsServiceError>;
}
