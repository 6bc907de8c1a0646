use crate::infrastructure::error::AppResult;
use crate::domain::address::rules::{NumberMustBePresent, TextMustNotBeEmpty};
use crate::domain::business_rule_interface::check_all;
use crate::domain::geolocation::geolocation::{Coordinates, GeocodingQuery};
use crate::presentation::address::address::AddressRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<i64>,
    pub street_name: String,
    pub number: i64,
    pub complement: Option<String>,
    pub neighbourhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// Domain Business Rules - validate requests and build records
impl Address {
    /// Business Rule: every required field is checked; all violations are reported together.
    pub fn validate(request: &AddressRequest) -> AppResult<()> {
        check_all(&[
            &TextMustNotBeEmpty::new(request.street_name.as_deref(), "Street name"),
            &NumberMustBePresent { number: request.number },
            &TextMustNotBeEmpty::new(request.neighbourhood.as_deref(), "Neighbourhood"),
            &TextMustNotBeEmpty::new(request.city.as_deref(), "City name"),
            &TextMustNotBeEmpty::new(request.state.as_deref(), "State name"),
            &TextMustNotBeEmpty::new(request.country.as_deref(), "Country name"),
            &TextMustNotBeEmpty::new(request.zip_code.as_deref(), "Zip Code"),
        ])
    }

    /// Business Rule: a new address never carries a caller-supplied id.
    pub fn create_new_address(request: &AddressRequest) -> AppResult<Self> {
        Self::from_request(None, request)
    }

    /// Business Rule: an update is a full overwrite of the record stored at `id`.
    pub fn replace_address(id: i64, request: &AddressRequest) -> AppResult<Self> {
        Self::from_request(Some(id), request)
    }

    fn from_request(id: Option<i64>, request: &AddressRequest) -> AppResult<Self> {
        Self::validate(request)?;

        Ok(Self {
            id,
            street_name: request.street_name.clone().unwrap_or_default(),
            number: request.number.unwrap_or_default(),
            complement: request.complement.clone(),
            neighbourhood: request.neighbourhood.clone().unwrap_or_default(),
            city: request.city.clone().unwrap_or_default(),
            state: request.state.clone().unwrap_or_default(),
            country: request.country.clone().unwrap_or_default(),
            zip_code: request.zip_code.clone().unwrap_or_default(),
            latitude: request.latitude,
            longitude: request.longitude,
        })
    }

    pub fn needs_geolocation(&self) -> bool {
        self.latitude.is_none() || self.longitude.is_none()
    }

    pub fn geocoding_query(&self) -> GeocodingQuery {
        GeocodingQuery {
            number: self.number,
            street_name: self.street_name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }

    /// Writes both coordinates together; `NotFound` leaves the record untouched.
    pub fn apply_coordinates(&mut self, coordinates: Coordinates) {
        if let Coordinates::Found { latitude, longitude } = coordinates {
            self.latitude = Some(latitude);
            self.longitude = Some(longitude);
        }
    }
}
