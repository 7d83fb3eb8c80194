use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::LeadDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::leads;
use crate::schema::leads::dsl::*;

use brickdesk_core::leads::{Lead, LeadRepositoryTrait, LeadStage, LeadUpdate, NewLead};
use brickdesk_core::Result;

pub struct LeadRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LeadRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LeadRepository { pool, writer }
    }
}

#[async_trait]
impl LeadRepositoryTrait for LeadRepository {
    fn list_leads(&self) -> Result<Vec<Lead>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = leads
            .select(LeadDB::as_select())
            .order(created_at.desc())
            .load::<LeadDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Lead::try_from).collect()
    }

    fn get_lead(&self, lead_id: &str) -> Result<Lead> {
        let mut conn = get_connection(&self.pool)?;
        let row = leads
            .select(LeadDB::as_select())
            .find(lead_id)
            .first::<LeadDB>(&mut conn)
            .map_err(StorageError::from)?;
        Lead::try_from(row)
    }

    async fn insert_new_lead(&self, new_lead: NewLead) -> Result<Lead> {
        self.writer
            .exec(move |conn| {
                let lead_id = new_lead
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let row = LeadDB::from_new(new_lead, lead_id);
                let inserted = diesel::insert_into(leads::table)
                    .values(&row)
                    .returning(LeadDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Lead::try_from(inserted)
            })
            .await
    }

    async fn update_lead(&self, lead_update: LeadUpdate) -> Result<Lead> {
        self.writer
            .exec(move |conn| {
                let existing = leads
                    .select(LeadDB::as_select())
                    .find(&lead_update.id)
                    .first::<LeadDB>(conn)
                    .map_err(StorageError::from)?;

                // Any edit counts as activity on the lead.
                let row = LeadDB {
                    id: lead_update.id.clone(),
                    name: lead_update.name,
                    phone: lead_update.phone,
                    email: lead_update.email,
                    project: lead_update.project,
                    agent_type: lead_update.agent_type.as_db_str().to_string(),
                    channel: lead_update.channel.as_db_str().to_string(),
                    score: lead_update.score,
                    budget: lead_update.budget,
                    stage: lead_update.stage.as_db_str().to_string(),
                    assigned_to: lead_update.assigned_to,
                    created_at: existing.created_at,
                    last_activity: chrono::Utc::now().naive_utc(),
                    notes: lead_update.notes,
                };

                diesel::update(leads.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Lead::try_from(row)
            })
            .await
    }

    async fn set_stage(&self, lead_id: String, new_stage: LeadStage) -> Result<Lead> {
        self.writer
            .exec(move |conn| {
                diesel::update(leads.find(&lead_id))
                    .set((
                        stage.eq(new_stage.as_db_str()),
                        last_activity.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = leads
                    .select(LeadDB::as_select())
                    .find(&lead_id)
                    .first::<LeadDB>(conn)
                    .map_err(StorageError::from)?;
                Lead::try_from(row)
            })
            .await
    }

    async fn set_assignee(&self, lead_id: String, profile_id: Option<String>) -> Result<Lead> {
        self.writer
            .exec(move |conn| {
                diesel::update(leads.find(&lead_id))
                    .set((
                        assigned_to.eq(profile_id),
                        last_activity.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let row = leads
                    .select(LeadDB::as_select())
                    .find(&lead_id)
                    .first::<LeadDB>(conn)
                    .map_err(StorageError::from)?;
                Lead::try_from(row)
            })
            .await
    }
}
