pub mod model;
pub mod repository;

pub use model::LeadDB;
pub use repository::LeadRepository;
