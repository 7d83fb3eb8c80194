pub mod conversations_model;
pub mod conversations_service;
pub mod conversations_traits;

pub use conversations_model::*;
pub use conversations_service::ConversationService;
pub use conversations_traits::{ConversationRepositoryTrait, ConversationServiceTrait};
