use crate::infrastructure::error::{AppError, AppResult};
use crate::domain::address::address::Address;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Process-local address store; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryAddressRepository {
    addresses: RwLock<BTreeMap<i64, Address>>,
    sequence: AtomicI64,
}

impl InMemoryAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.addresses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.addresses.read().await.is_empty()
    }
}

#[async_trait]
impl AddressRepositoryInterface for InMemoryAddressRepository {
    async fn find_address_by_id(&self, id: i64) -> AppResult<Option<Address>> {
        Ok(self.addresses.read().await.get(&id).cloned())
    }

    async fn save_address(&self, mut address: Address) -> AppResult<Address> {
        let id = match address.id {
            Some(id) => {
                self.sequence.fetch_max(id, Ordering::SeqCst);
                id
            },
            None => self
                .sequence
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
                .map(|last| last + 1)
                .map_err(|_| AppError::StorageError("Address id sequence exhausted".to_string()))?,
        };
        address.id = Some(id);

        self.addresses.write().await.insert(id, address.clone());
        Ok(address)
    }

    async fn delete_address(&self, id: i64) -> AppResult<()> {
        match self.addresses.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            }),
        }
    }
}
