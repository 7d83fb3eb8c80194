//! Database models for leads.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use brickdesk_core::leads::{AgentType, Channel, Lead, LeadStage, NewLead};
use brickdesk_core::Error;

/// Database model for leads.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::leads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LeadDB {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub project: String,
    pub agent_type: String,
    pub channel: String,
    pub score: i32,
    pub budget: Option<f64>,
    pub stage: String,
    pub assigned_to: Option<String>,
    pub created_at: NaiveDateTime,
    pub last_activity: NaiveDateTime,
    pub notes: Option<String>,
}

impl TryFrom<LeadDB> for Lead {
    type Error = Error;

    fn try_from(db: LeadDB) -> Result<Self, Self::Error> {
        Ok(Lead {
            agent_type: AgentType::from_db_str(&db.agent_type)?,
            channel: Channel::from_db_str(&db.channel)?,
            stage: LeadStage::from_db_str(&db.stage)?,
            id: db.id,
            name: db.name,
            phone: db.phone,
            email: db.email,
            project: db.project,
            score: db.score,
            budget: db.budget,
            assigned_to: db.assigned_to,
            created_at: db.created_at,
            last_activity: db.last_activity,
            notes: db.notes,
        })
    }
}

impl LeadDB {
    /// Builds a fresh row from an insert payload; timestamps start now.
    pub fn from_new(new_lead: NewLead, lead_id: String) -> Self {
        let now = chrono::Utc::now().naive_utc();
        LeadDB {
            id: lead_id,
            name: new_lead.name,
            phone: new_lead.phone,
            email: new_lead.email,
            project: new_lead.project,
            agent_type: new_lead.agent_type.as_db_str().to_string(),
            channel: new_lead.channel.as_db_str().to_string(),
            score: new_lead.score,
            budget: new_lead.budget,
            stage: new_lead.stage.as_db_str().to_string(),
            assigned_to: new_lead.assigned_to,
            created_at: now,
            last_activity: now,
            notes: new_lead.notes,
        }
    }
}
