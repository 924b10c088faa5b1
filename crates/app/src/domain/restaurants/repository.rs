//! Restaurants Repository

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use tavola::menu::Restaurant;
use uuid::Uuid;

use crate::{
    domain::restaurants::models::{SearchHit, SearchKind},
    store::{StoreClient, StoreError},
};

const RESTAURANTS_TABLE: &str = "restaurants";
const MENU_ITEMS_TABLE: &str = "menu_items";

/// Wire shape shared by both name-searchable tables.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRow {
    pub id: Uuid,
    pub name: String,
    pub image: String,
}

impl SearchRow {
    pub(crate) fn hit(self, kind: SearchKind) -> SearchHit {
        SearchHit {
            id: self.id,
            name: self.name,
            kind,
            image: self.image,
        }
    }
}

#[automock]
#[async_trait]
pub trait RestaurantsRepository: Send + Sync {
    /// Fetch every restaurant with its nested menu.
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError>;

    /// Fetch one restaurant with its nested menu.
    async fn get_restaurant(&self, id: Uuid) -> Result<Restaurant, StoreError>;

    /// Restaurants whose name contains `pattern`, case-insensitively, capped
    /// at `limit` rows.
    async fn search_restaurants(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<SearchRow>, StoreError>;

    /// Menu items whose name contains `pattern`, case-insensitively, capped
    /// at `limit` rows.
    async fn search_menu_items(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<SearchRow>, StoreError>;
}

#[derive(Debug, Clone)]
pub struct RestRestaurantsRepository {
    store: StoreClient,
}

impl RestRestaurantsRepository {
    #[must_use]
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RestaurantsRepository for RestRestaurantsRepository {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        self.store
            .select(
                RESTAURANTS_TABLE,
                &[("select", "*,menu_items(*)".to_string())],
            )
            .await
    }

    async fn get_restaurant(&self, id: Uuid) -> Result<Restaurant, StoreError> {
        let rows: Vec<Restaurant> = self
            .store
            .select(
                RESTAURANTS_TABLE,
                &[
                    ("id", format!("eq.{id}")),
                    ("select", "*,menu_items(*)".to_string()),
                ],
            )
            .await?;

        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn search_restaurants(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<SearchRow>, StoreError> {
        self.store
            .select(
                RESTAURANTS_TABLE,
                &[
                    ("select", "id,name,image".to_string()),
                    ("name", format!("ilike.%{pattern}%")),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }

    async fn search_menu_items(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<SearchRow>, StoreError> {
        self.store
            .select(
                MENU_ITEMS_TABLE,
                &[
                    ("select", "id,name,image".to_string()),
                    ("name", format!("ilike.%{pattern}%")),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }
}
