use crate::core::configure::geocoding::GeocodingConfig;
use crate::infrastructure::error::{AppError, AppResult};
use crate::domain::geolocation::geolocation::{Coordinates, GeocodingQuery, GeocodingResponse};
use crate::domain::geolocation::geolocation_gateway_interface::GeolocationGatewayInterface;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const GEOCODE_PATH: &str = "/geocode/json";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Google Geocoding API client.
pub struct GoogleGeolocationGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleGeolocationGateway {
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GEOCODE_PATH)
    }
}

#[async_trait]
impl GeolocationGatewayInterface for GoogleGeolocationGateway {
    async fn get_coordinates(&self, query: &GeocodingQuery) -> AppResult<Coordinates> {
        let address = query.to_string();
        log::debug!("Requesting coordinates for \"{address}\"");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("address", address.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::GeocodingError(format!(
                "Geocoding provider answered {status} for \"{address}\""
            )));
        }

        let body: GeocodingResponse = response.json().await?;
        if body.is_provider_error() {
            log::warn!(
                "Geocoding provider rejected \"{address}\": {} {}",
                body.status.as_deref().unwrap_or_default(),
                body.error_message.as_deref().unwrap_or_default()
            );
        }

        Ok(body.coordinates())
    }
}
