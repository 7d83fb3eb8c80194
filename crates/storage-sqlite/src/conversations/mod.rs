pub mod model;
pub mod repository;

pub use model::ConversationDB;
pub use repository::ConversationRepository;
