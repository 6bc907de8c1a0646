pub mod address_repository;
pub mod memory_address_repository;
