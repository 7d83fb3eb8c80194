pub mod catalog_model;
pub mod catalog_service;
pub mod catalog_traits;

pub use catalog_model::*;
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
