use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::ConversationDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::conversations;
use crate::schema::conversations::dsl::*;

use brickdesk_core::conversations::{
    Conversation, ConversationRepositoryTrait, ConversationStatus, ConversationUpsert,
};
use brickdesk_core::Result;

pub struct ConversationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ConversationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ConversationRepository { pool, writer }
    }
}

#[async_trait]
impl ConversationRepositoryTrait for ConversationRepository {
    fn list_conversations(&self) -> Result<Vec<Conversation>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = conversations
            .select(ConversationDB::as_select())
            .order(last_activity.desc())
            .load::<ConversationDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Conversation::try_from).collect()
    }

    fn get_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        let mut conn = get_connection(&self.pool)?;
        let row = conversations
            .select(ConversationDB::as_select())
            .find(conversation_id)
            .first::<ConversationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Conversation::try_from(row)
    }

    async fn upsert_conversation(&self, upsert: ConversationUpsert) -> Result<Conversation> {
        self.writer
            .exec(move |conn| {
                let row = ConversationDB {
                    id: upsert.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    participant: upsert.participant,
                    status: upsert.status.as_db_str().to_string(),
                    agent_type: upsert.agent_type.as_db_str().to_string(),
                    last_activity: chrono::Utc::now().naive_utc(),
                };
                diesel::insert_into(conversations::table)
                    .values(&row)
                    .on_conflict(conversations::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Conversation::try_from(row)
            })
            .await
    }

    async fn set_status(
        &self,
        conversation_id: String,
        new_status: ConversationStatus,
    ) -> Result<Conversation> {
        self.writer
            .exec(move |conn| {
                diesel::update(conversations.find(&conversation_id))
                    .set((
                        status.eq(new_status.as_db_str()),
                        last_activity.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = conversations
                    .select(ConversationDB::as_select())
                    .find(&conversation_id)
                    .first::<ConversationDB>(conn)
                    .map_err(StorageError::from)?;
                Conversation::try_from(row)
            })
            .await
    }
}
