//! Conversation domain models.
//!
//! Conversations mirror live channel state and are ephemeral: rows are
//! upserted wholesale as the channel reports activity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::leads::AgentType;
use crate::{errors::ValidationError, Error, Result};

/// Live state of an inbound conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Typing,
    #[default]
    Waiting,
    Closed,
}

impl ConversationStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            ConversationStatus::Typing => "typing",
            ConversationStatus::Waiting => "waiting",
            ConversationStatus::Closed => "closed",
        }
    }

    pub fn from_db_str(value: &str) -> Result<Self> {
        match value {
            "typing" => Ok(ConversationStatus::Typing),
            "waiting" => Ok(ConversationStatus::Waiting),
            "closed" => Ok(ConversationStatus::Closed),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown conversation status '{other}'"
            )))),
        }
    }
}

/// Domain model representing a live inbound conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    /// Display name or handle of the person on the other end.
    pub participant: String,
    pub status: ConversationStatus,
    pub agent_type: AgentType,
    pub last_activity: NaiveDateTime,
}

/// Upsert payload for a conversation; ephemeral rows are replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub participant: String,
    #[serde(default)]
    pub status: ConversationStatus,
    pub agent_type: AgentType,
}

impl ConversationUpsert {
    pub fn validate(&self) -> Result<()> {
        if self.participant.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "participant".to_string(),
            )));
        }
        Ok(())
    }
}

/// Counts per status over the live conversation set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStats {
    pub total: usize,
    pub typing: usize,
    pub waiting: usize,
    pub closed: usize,
}

pub fn conversation_stats(conversations: &[Conversation]) -> ConversationStats {
    let mut stats = ConversationStats {
        total: conversations.len(),
        ..Default::default()
    };
    for conversation in conversations {
        match conversation.status {
            ConversationStatus::Typing => stats.typing += 1,
            ConversationStatus::Waiting => stats.waiting += 1,
            ConversationStatus::Closed => stats.closed += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConversationStatus::Typing).unwrap(),
            "\"typing\""
        );
        assert_eq!(
            serde_json::from_str::<ConversationStatus>("\"closed\"").unwrap(),
            ConversationStatus::Closed
        );
    }

    #[test]
    fn stats_count_per_status() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let conv = |status| Conversation {
            id: "c".to_string(),
            participant: "p".to_string(),
            status,
            agent_type: AgentType::Tasaciones,
            last_activity: ts,
        };
        let stats = conversation_stats(&[
            conv(ConversationStatus::Waiting),
            conv(ConversationStatus::Waiting),
            conv(ConversationStatus::Closed),
        ]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.waiting, 2);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.typing, 0);
    }

    #[test]
    fn blank_participant_is_rejected() {
        let upsert = ConversationUpsert {
            id: None,
            participant: " ".to_string(),
            status: ConversationStatus::Waiting,
            agent_type: AgentType::Inmuebles,
        };
        assert!(upsert.validate().is_err());
    }
}
