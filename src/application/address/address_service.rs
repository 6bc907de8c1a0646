use crate::application::address::address_service_interface::AddressServiceInterface;
use crate::infrastructure::error::{AppError, AppResult};
use crate::domain::address::address::Address;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::geolocation::geolocation_gateway_interface::GeolocationGatewayInterface;
use crate::presentation::address::address::{AddressRequest, AddressSerializer};
use std::sync::Arc;

/// Application service - orchestrates validation, geolocation and persistence
pub struct AddressService {
    pub repository: Arc<dyn AddressRepositoryInterface>,
    pub geolocation: Arc<dyn GeolocationGatewayInterface>,
}

impl AddressService {
    pub fn new(
        repository: Arc<dyn AddressRepositoryInterface>,
        geolocation: Arc<dyn GeolocationGatewayInterface>,
    ) -> Self {
        Self { repository, geolocation }
    }

    async fn find_existing(&self, id: i64) -> AppResult<Address> {
        self.repository
            .find_address_by_id(id)
            .await?
            .ok_or_else(|| AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            })
    }

    /// Fills missing coordinates from the geocoding provider. Provider failures leave the
    /// record as supplied.
    async fn fill_geolocation_if_empty(&self, address: &mut Address) {
        if !address.needs_geolocation() {
            return;
        }

        let query = address.geocoding_query();
        match self.geolocation.get_coordinates(&query).await {
            Ok(coordinates) => address.apply_coordinates(coordinates),
            Err(err) => {
                log::warn!("Geolocation lookup failed for \"{query}\", saving without coordinates: {err}");
            },
        }
    }
}

impl AddressServiceInterface for AddressService {
    async fn get_address_by_id(&self, id: i64) -> AppResult<AddressSerializer> {
        let address = self.find_existing(id).await?;
        Ok(AddressSerializer::from(address))
    }

    async fn create_address(&self, request: AddressRequest) -> AppResult<AddressSerializer> {
        // Domain: validate and build, discarding any caller id
        let mut address = Address::create_new_address(&request)?;

        // External service: geolocation
        self.fill_geolocation_if_empty(&mut address).await;

        // Infrastructure: persist, the store assigns the id
        let created = self.repository.save_address(address).await?;
        log::info!("Address created with id: {:?}", created.id);

        Ok(AddressSerializer::from(created))
    }

    async fn update_address(&self, id: i64, request: AddressRequest) -> AppResult<AddressSerializer> {
        // Domain: validation runs before the existence check
        Address::validate(&request)?;

        // Database: the address must exist
        self.find_existing(id).await?;

        let mut address = Address::replace_address(id, &request)?;
        self.fill_geolocation_if_empty(&mut address).await;

        let updated = self.repository.save_address(address).await?;
        Ok(AddressSerializer::from(updated))
    }

    async fn delete_address(&self, id: i64) -> AppResult<()> {
        self.find_existing(id).await?;
        self.repository.delete_address(id).await
    }
}
