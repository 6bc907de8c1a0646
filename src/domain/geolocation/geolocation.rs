use serde::Deserialize;
use std::fmt;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinates {
    Found { latitude: f64, longitude: f64 },
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingQuery {
    pub number: i64,
    pub street_name: String,
    pub city: String,
    pub state: String,
}

impl fmt::Display for GeocodingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}, {}", self.number, self.street_name, self.city, self.state)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeocodingResult {
    pub geometry: Geometry,
}

/// Body of `GET /geocode/json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

impl GeocodingResponse {
    /// Only the first candidate is consulted.
    pub fn coordinates(&self) -> Coordinates {
        match self.results.first() {
            Some(result) => Coordinates::Found {
                latitude: result.geometry.location.lat,
                longitude: result.geometry.location.lng,
            },
            None => Coordinates::NotFound,
        }
    }

    pub fn is_provider_error(&self) -> bool {
        match self.status.as_deref() {
            None | Some(STATUS_OK) | Some(STATUS_ZERO_RESULTS) => false,
            Some(_) => true,
        }
    }
}
