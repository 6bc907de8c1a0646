use crate::infrastructure::error::{AppError, AppResult};
use crate::domain::address::address::Address;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::infrastructure::persistence::entity::address::{ActiveModel, Entity};
use crate::infrastructure::persistence::postgres::DatabaseClient;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait};
use std::sync::Arc;

/// sea-orm backed address store.
pub struct AddressRepository {
    pub db: Arc<DatabaseClient>,
}

impl AddressRepository {
    pub fn new(db: Arc<DatabaseClient>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepositoryInterface for AddressRepository {
    async fn find_address_by_id(&self, id: i64) -> AppResult<Option<Address>> {
        let address = Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(address.map(Address::from))
    }

    async fn save_address(&self, address: Address) -> AppResult<Address> {
        let id = address.id;
        let model: ActiveModel = address.into();

        let saved = match id {
            Some(id) if Entity::find_by_id(id).one(self.db.as_ref()).await?.is_some() => {
                model.update(self.db.as_ref()).await?
            },
            _ => model.insert(self.db.as_ref()).await?,
        };

        Ok(Address::from(saved))
    }

    async fn delete_address(&self, id: i64) -> AppResult<()> {
        let result = Entity::delete_by_id(id).exec(self.db.as_ref()).await?;
        if result.rows_affected == 0 {
            return Err(AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            });
        }
        Ok(())
    }
}
