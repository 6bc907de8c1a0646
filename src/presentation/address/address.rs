use crate::domain::address::address::Address;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressSerializer {
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

impl From<Address> for AddressSerializer {
    fn from(value: Address) -> Self {
        AddressSerializer {
            id: value.id,
            street_name: value.street_name,
            number: value.number,
            complement: value.complement,
            neighbourhood: value.neighbourhood,
            city: value.city,
            state: value.state,
            country: value.country,
            zip_code: value.zip_code,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Inbound address payload. Every field may be missing; the service validates.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub neighbourhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
