//! Listings

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::PgListingsRepository;

pub use errors::ListingsServiceError;
pub use service::*;
