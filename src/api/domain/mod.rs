pub mod address;
pub mod server;
