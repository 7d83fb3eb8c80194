use log::debug;
use std::sync::Arc;

use super::conversations_model::{
    conversation_stats, Conversation, ConversationStats, ConversationStatus, ConversationUpsert,
};
use super::conversations_traits::{ConversationRepositoryTrait, ConversationServiceTrait};
use crate::errors::Result;
use crate::leads::{Lead, LeadServiceTrait, NewLead};

/// Service reflecting live channel state into the inbox view.
pub struct ConversationService {
    repository: Arc<dyn ConversationRepositoryTrait>,
    lead_service: Arc<dyn LeadServiceTrait>,
}

impl ConversationService {
    pub fn new(
        repository: Arc<dyn ConversationRepositoryTrait>,
        lead_service: Arc<dyn LeadServiceTrait>,
    ) -> Self {
        ConversationService {
            repository,
            lead_service,
        }
    }
}

#[async_trait::async_trait]
impl ConversationServiceTrait for ConversationService {
    fn get_conversations(&self) -> Result<Vec<Conversation>> {
        self.repository.list_conversations()
    }

    fn get_conversation_stats(&self) -> Result<ConversationStats> {
        let conversations = self.repository.list_conversations()?;
        Ok(conversation_stats(&conversations))
    }

    async fn upsert_conversation(&self, upsert: ConversationUpsert) -> Result<Conversation> {
        upsert.validate()?;
        self.repository.upsert_conversation(upsert).await
    }

    async fn set_status(
        &self,
        conversation_id: String,
        status: ConversationStatus,
    ) -> Result<Conversation> {
        self.repository.set_status(conversation_id, status).await
    }

    async fn promote_to_lead(&self, conversation_id: String, new_lead: NewLead) -> Result<Lead> {
        // The conversation must exist before we spawn a lead from it.
        let conversation = self.repository.get_conversation(&conversation_id)?;
        debug!(
            "Promoting conversation {} ({}) to lead",
            conversation.id, conversation.participant
        );
        let lead = self.lead_service.create_lead(new_lead).await?;
        self.repository
            .set_status(conversation_id, ConversationStatus::Closed)
            .await?;
        Ok(lead)
    }
}
