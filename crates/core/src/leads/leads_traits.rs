use async_trait::async_trait;

use super::leads_model::{Lead, LeadStats, LeadUpdate, NewLead};
use super::leads_query::LeadQuery;
use crate::errors::Result;
use crate::leads::leads_model::LeadStage;

/// Trait for lead repository operations.
///
/// Leads are never hard-deleted: closed leads stay in storage and are only
/// filtered out at display time.
#[async_trait]
pub trait LeadRepositoryTrait: Send + Sync {
    fn list_leads(&self) -> Result<Vec<Lead>>;
    fn get_lead(&self, lead_id: &str) -> Result<Lead>;
    async fn insert_new_lead(&self, new_lead: NewLead) -> Result<Lead>;
    async fn update_lead(&self, lead_update: LeadUpdate) -> Result<Lead>;
    async fn set_stage(&self, lead_id: String, stage: LeadStage) -> Result<Lead>;
    async fn set_assignee(&self, lead_id: String, profile_id: Option<String>) -> Result<Lead>;
}

/// Trait for lead service operations.
#[async_trait]
pub trait LeadServiceTrait: Send + Sync {
    fn get_leads(&self) -> Result<Vec<Lead>>;
    fn get_lead(&self, lead_id: &str) -> Result<Lead>;
    /// Filter-then-sort over the full collection, in memory.
    fn search_leads(&self, query: &LeadQuery) -> Result<Vec<Lead>>;
    fn get_lead_stats(&self) -> Result<LeadStats>;
    /// CSV of the rows matching `query`, header line included.
    fn export_leads_csv(&self, query: &LeadQuery) -> Result<String>;
    async fn create_lead(&self, new_lead: NewLead) -> Result<Lead>;
    async fn update_lead(&self, lead_update: LeadUpdate) -> Result<Lead>;
    async fn set_stage(&self, lead_id: String, stage: LeadStage) -> Result<Lead>;
    async fn assign_lead(&self, lead_id: String, profile_id: Option<String>) -> Result<Lead>;
}
