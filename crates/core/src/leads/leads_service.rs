use log::debug;
use std::sync::Arc;

use super::leads_csv::export_csv;
use super::leads_model::{lead_stats, Lead, LeadStage, LeadStats, LeadUpdate, NewLead};
use super::leads_query::{apply_query, LeadQuery};
use super::leads_traits::{LeadRepositoryTrait, LeadServiceTrait};
use crate::errors::Result;

/// Service for managing leads and running the table query pipeline.
pub struct LeadService {
    repository: Arc<dyn LeadRepositoryTrait>,
}

impl LeadService {
    pub fn new(repository: Arc<dyn LeadRepositoryTrait>) -> Self {
        LeadService { repository }
    }
}

#[async_trait::async_trait]
impl LeadServiceTrait for LeadService {
    fn get_leads(&self) -> Result<Vec<Lead>> {
        self.repository.list_leads()
    }

    fn get_lead(&self, lead_id: &str) -> Result<Lead> {
        self.repository.get_lead(lead_id)
    }

    fn search_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>> {
        let leads = self.repository.list_leads()?;
        Ok(apply_query(leads, query))
    }

    fn get_lead_stats(&self) -> Result<LeadStats> {
        let leads = self.repository.list_leads()?;
        Ok(lead_stats(&leads))
    }

    fn export_leads_csv(&self, query: &LeadQuery) -> Result<String> {
        let rows = self.search_leads(query)?;
        debug!("Exporting {} leads as CSV", rows.len());
        export_csv(&rows)
    }

    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead> {
        new_lead.validate()?;
        self.repository.insert_new_lead(new_lead).await
    }

    async fn update_lead(&self, lead_update: LeadUpdate) -> Result<Lead> {
        lead_update.validate()?;
        self.repository.update_lead(lead_update).await
    }

    async fn set_stage(&self, lead_id: String, stage: LeadStage) -> Result<Lead> {
        self.repository.set_stage(lead_id, stage).await
    }

    async fn assign_lead(&self, lead_id: String, profile_id: Option<String>) -> Result<Lead> {
        self.repository.set_assignee(lead_id, profile_id).await
    }
}
