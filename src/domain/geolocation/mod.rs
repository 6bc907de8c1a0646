pub mod geolocation;
pub mod geolocation_gateway_interface;
