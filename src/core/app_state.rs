use crate::application::address::address_service::AddressService;
use crate::core::configure::app::AppConfig;
use crate::infrastructure::error::AppResult;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::geolocation::geolocation_gateway_interface::{
    DisabledGeolocationGateway, GeolocationGatewayInterface,
};
use crate::infrastructure::gateway::geolocation::GoogleGeolocationGateway;
use crate::infrastructure::model::address_repository::AddressRepository;
use crate::infrastructure::model::memory_address_repository::InMemoryAddressRepository;
use crate::infrastructure::persistence::postgres::{self, DatabaseClient, DatabaseClientExt};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub address_service: Arc<AddressService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let config = Arc::new(config);

        let repository: Arc<dyn AddressRepositoryInterface> = if config.database.in_memory {
            log::warn!("Using in-memory address store, data will not survive a restart");
            Arc::new(InMemoryAddressRepository::new())
        } else {
            let db = Arc::new(DatabaseClient::build_from_config(&config).await?);
            postgres::migrate(&db).await?;
            Arc::new(AddressRepository::new(db))
        };

        let geolocation: Arc<dyn GeolocationGatewayInterface> = if config.geocoding.is_enabled() {
            Arc::new(GoogleGeolocationGateway::new(&config.geocoding)?)
        } else {
            log::warn!("No geocoding api key configured, addresses will not be geolocated");
            Arc::new(DisabledGeolocationGateway)
        };

        Ok(Self::from_parts(config, repository, geolocation))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        repository: Arc<dyn AddressRepositoryInterface>,
        geolocation: Arc<dyn GeolocationGatewayInterface>,
    ) -> Self {
        let address_service = Arc::new(AddressService::new(repository, geolocation));
        Self { config, address_service }
    }
}
