pub mod policy;
pub mod profiles_model;
pub mod profiles_service;
pub mod profiles_traits;

pub use policy::{role_allows, Capability};
pub use profiles_model::*;
pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
