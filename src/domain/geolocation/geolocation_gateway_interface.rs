use super::geolocation::{Coordinates, GeocodingQuery};
use crate::infrastructure::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait GeolocationGatewayInterface: Send + Sync {
    async fn get_coordinates(&self, query: &GeocodingQuery) -> AppResult<Coordinates>;
}

/// Used when no provider key is configured.
pub struct DisabledGeolocationGateway;

#[async_trait]
impl GeolocationGatewayInterface for DisabledGeolocationGateway {
    async fn get_coordinates(&self, _query: &GeocodingQuery) -> AppResult<Coordinates> {
        Ok(Coordinates::NotFound)
    }
}
