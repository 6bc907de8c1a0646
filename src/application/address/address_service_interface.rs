use crate::infrastructure::error::AppResult;
use crate::presentation::address::address::{AddressRequest, AddressSerializer};

pub trait AddressServiceInterface: Send + Sync + 'static {
    async fn get_address_by_id(&self, id: i64) -> AppResult<AddressSerializer>;

    async fn create_address(&self, request: AddressRequest) -> AppResult<AddressSerializer>;

    async fn update_address(&self, id: i64, request: AddressRequest) -> AppResult<AddressSerializer>;

    async fn delete_address(&self, id: i64) -> AppResult<()>;
}
