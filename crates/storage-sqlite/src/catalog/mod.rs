pub mod model;
pub mod repository;

pub use model::DevelopmentDB;
pub use repository::CatalogRepository;
