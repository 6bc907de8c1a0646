use address_service::application::address::address_service::AddressService;
use address_service::core::app_state::AppState;
use address_service::core::configure::app::AppConfig;
use address_service::core::configure::{self, Profile};
use address_service::infrastructure::error::{AppError, AppResult};
use address_service::domain::address::address::Address;
use address_service::domain::address::address_repository_interface::AddressRepositoryInterface;
use address_service::domain::geolocation::geolocation::{Coordinates, GeocodingQuery};
use address_service::domain::geolocation::geolocation_gateway_interface::GeolocationGatewayInterface;
use address_service::infrastructure::model::memory_address_repository::InMemoryAddressRepository;
use address_service::presentation::address::address::AddressRequest;
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fully populated request with both coordinates set.
pub fn full_address_request() -> AddressRequest {
    AddressRequest {
        id: Some(123),
        street_name: Some("Street name".to_string()),
        number: Some(321),
        complement: Some("Complement".to_string()),
        neighbourhood: Some("Neighbourhood".to_string()),
        city: Some("City".to_string()),
        state: Some("State".to_string()),
        country: Some("Country".to_string()),
        zip_code: Some("ZipCode".to_string()),
        latitude: Some(1.2),
        longitude: Some(2.1),
    }
}

pub fn stored_address(id: i64) -> Address {
    Address {
        id: Some(id),
        street_name: "Old street".to_string(),
        number: 1,
        complement: None,
        neighbourhood: "Old neighbourhood".to_string(),
        city: "Old city".to_string(),
        state: "Old state".to_string(),
        country: "Old country".to_string(),
        zip_code: "00000".to_string(),
        latitude: Some(10.0),
        longitude: Some(20.0),
    }
}

pub fn validation_reasons(err: AppError) -> Vec<String> {
    match err {
        AppError::ValidationError { reasons } => reasons,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

pub fn test_config() -> AppConfig {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("settings");
    configure::read(&dir, Profile::Test).expect("Failed to read test settings")
}

/// Counts persistence calls on top of the in-memory store.
#[derive(Default)]
pub struct SpyAddressRepository {
    pub inner: InMemoryAddressRepository,
    pub saves: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl SpyAddressRepository {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub async fn seed(&self, address: Address) {
        self.inner
            .save_address(address)
            .await
            .expect("Failed to seed address");
    }
}

#[async_trait]
impl AddressRepositoryInterface for SpyAddressRepository {
    async fn find_address_by_id(&self, id: i64) -> AppResult<Option<Address>> {
        self.inner.find_address_by_id(id).await
    }

    async fn save_address(&self, address: Address) -> AppResult<Address> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save_address(address).await
    }

    async fn delete_address(&self, id: i64) -> AppResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_address(id).await
    }
}

pub enum FakeAnswer {
    Coordinates(Coordinates),
    Failure,
}

/// Geolocation gateway returning a canned answer and recording every query.
pub struct FakeGeolocationGateway {
    answer: FakeAnswer,
    pub queries: Mutex<Vec<GeocodingQuery>>,
}

impl FakeGeolocationGateway {
    pub fn returning(coordinates: Coordinates) -> Self {
        Self { answer: FakeAnswer::Coordinates(coordinates), queries: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { answer: FakeAnswer::Failure, queries: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<GeocodingQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeolocationGatewayInterface for FakeGeolocationGateway {
    async fn get_coordinates(&self, query: &GeocodingQuery) -> AppResult<Coordinates> {
        self.queries.lock().unwrap().push(query.clone());
        match self.answer {
            FakeAnswer::Coordinates(coordinates) => Ok(coordinates),
            FakeAnswer::Failure => Err(AppError::GeocodingError("provider unreachable".to_string())),
        }
    }
}

pub struct TestContext {
    pub repository: Arc<SpyAddressRepository>,
    pub geolocation: Arc<FakeGeolocationGateway>,
    pub service: AddressService,
}

impl TestContext {
    pub fn new(geolocation: FakeGeolocationGateway) -> Self {
        let repository = Arc::new(SpyAddressRepository::default());
        let geolocation = Arc::new(geolocation);
        let service = AddressService::new(repository.clone(), geolocation.clone());
        Self { repository, geolocation, service }
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_parts(
            Arc::new(test_config()),
            self.repository.clone(),
            self.geolocation.clone(),
        )
    }
}
