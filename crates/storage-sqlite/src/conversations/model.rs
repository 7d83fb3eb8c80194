//! Database models for conversations.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use brickdesk_core::conversations::{Conversation, ConversationStatus};
use brickdesk_core::leads::AgentType;
use brickdesk_core::Error;

/// Database model for live conversations.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::conversations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ConversationDB {
    pub id: String,
    pub participant: String,
    pub status: String,
    pub agent_type: String,
    pub last_activity: NaiveDateTime,
}

impl TryFrom<ConversationDB> for Conversation {
    type Error = Error;

    fn try_from(db: ConversationDB) -> Result<Self, Self::Error> {
        Ok(Conversation {
            status: ConversationStatus::from_db_str(&db.status)?,
            agent_type: AgentType::from_db_str(&db.agent_type)?,
            id: db.id,
            participant: db.participant,
            last_activity: db.last_activity,
        })
    }
}
