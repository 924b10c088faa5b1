//! Addresses service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    domain::addresses::{
        errors::AddressesServiceError,
        models::{Address, NewAddress},
        repository::{AddressesRepository, RestAddressesRepository},
    },
    store::StoreClient,
};

#[derive(Clone)]
pub struct StoreAddressesService {
    repository: Arc<dyn AddressesRepository>,
}

impl StoreAddressesService {
    #[must_use]
    pub fn new(repository: Arc<dyn AddressesRepository>) -> Self {
        Self { repository }
    }

    /// Service backed by the store's REST interface.
    #[must_use]
    pub fn rest(store: StoreClient) -> Self {
        Self::new(Arc::new(RestAddressesRepository::new(store)))
    }
}

impl std::fmt::Debug for StoreAddressesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreAddressesService").finish_non_exhaustive()
    }
}

#[async_trait]
impl AddressesService for StoreAddressesService {
    async fn list_addresses(&self, owner: Uuid) -> Result<Vec<Address>, AddressesServiceError> {
        let mut addresses = self.repository.list_addresses(owner).await?;

        // Default address first, preserving the store's order otherwise.
        addresses.sort_by_key(|address| !address.is_default);

        Ok(addresses)
    }

    async fn add_address(
        &self,
        owner: Uuid,
        address: NewAddress,
    ) -> Result<Address, AddressesServiceError> {
        Ok(self.repository.create_address(owner, &address).await?)
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// All saved addresses for `owner`, default first.
    async fn list_addresses(&self, owner: Uuid) -> Result<Vec<Address>, AddressesServiceError>;

    /// Save a new address for `owner`.
    async fn add_address(
        &self,
        owner: Uuid,
        address: NewAddress,
    ) -> Result<Address, AddressesServiceError>;
}
