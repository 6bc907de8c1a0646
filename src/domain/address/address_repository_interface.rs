use super::address::Address;
use crate::infrastructure::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait AddressRepositoryInterface: Send + Sync {
    async fn find_address_by_id(&self, id: i64) -> AppResult<Option<Address>>;
    /// Inserts when `id` is unset and returns the record with its assigned id; otherwise overwrites.
    async fn save_address(&self, address: Address) -> AppResult<Address>;
    async fn delete_address(&self, id: i64) -> AppResult<()>;
}
