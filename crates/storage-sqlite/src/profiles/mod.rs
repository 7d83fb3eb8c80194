pub mod model;
pub mod repository;

pub use model::ProfileDB;
pub use repository::ProfileRepository;
