use async_trait::async_trait;

use super::conversations_model::{
    Conversation, ConversationStats, ConversationStatus, ConversationUpsert,
};
use crate::errors::Result;
use crate::leads::{Lead, NewLead};

/// Trait for conversation repository operations.
#[async_trait]
pub trait ConversationRepositoryTrait: Send + Sync {
    fn list_conversations(&self) -> Result<Vec<Conversation>>;
    fn get_conversation(&self, conversation_id: &str) -> Result<Conversation>;
    async fn upsert_conversation(&self, upsert: ConversationUpsert) -> Result<Conversation>;
    async fn set_status(
        &self,
        conversation_id: String,
        status: ConversationStatus,
    ) -> Result<Conversation>;
}

/// Trait for conversation service operations.
#[async_trait]
pub trait ConversationServiceTrait: Send + Sync {
    fn get_conversations(&self) -> Result<Vec<Conversation>>;
    fn get_conversation_stats(&self) -> Result<ConversationStats>;
    async fn upsert_conversation(&self, upsert: ConversationUpsert) -> Result<Conversation>;
    async fn set_status(
        &self,
        conversation_id: String,
        status: ConversationStatus,
    ) -> Result<Conversation>;
    /// Promotes a conversation into a pipeline lead and closes it.
    async fn promote_to_lead(&self, conversation_id: String, new_lead: NewLead) -> Result<Lead>;
}
