pub mod entity;
pub mod postgres;
