//! Addresses Repository

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::addresses::models::{Address, NewAddress},
    store::{StoreClient, StoreError},
};

const ADDRESSES_TABLE: &str = "user_addresses";

#[automock]
#[async_trait]
pub trait AddressesRepository: Send + Sync {
    /// Fetch all addresses owned by `owner`.
    async fn list_addresses(&self, owner: Uuid) -> Result<Vec<Address>, StoreError>;

    /// Insert a new address for `owner` and return the created row.
    async fn create_address(&self, owner: Uuid, address: &NewAddress)
    -> Result<Address, StoreError>;
}

#[derive(Debug, Clone)]
pub struct RestAddressesRepository {
    store: StoreClient,
}

#[derive(Debug, Serialize)]
struct NewAddressRow<'a> {
    owner_id: Uuid,
    label: &'a str,
    address: &'a str,
    is_default: bool,
}

impl RestAddressesRepository {
    #[must_use]
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddressesRepository for RestAddressesRepository {
    async fn list_addresses(&self, owner: Uuid) -> Result<Vec<Address>, StoreError> {
        self.store
            .select(
                ADDRESSES_TABLE,
                &[
                    ("owner_id", format!("eq.{owner}")),
                    ("order", "is_default.desc".to_string()),
                ],
            )
            .await
    }

    async fn create_address(
        &self,
        owner: Uuid,
        address: &NewAddress,
    ) -> Result<Address, StoreError> {
        let rows: Vec<Address> = self
            .store
            .insert(
                ADDRESSES_TABLE,
                &[NewAddressRow {
                    owner_id: owner,
                    label: &address.label,
                    address: &address.address,
                    is_default: address.is_default,
                }],
            )
            .await?;

        rows.into_iter().next().ok_or_else(|| {
            StoreError::UnexpectedResponse("address insert returned no representation".to_string())
        })
    }
}
