//! Lead domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Position of a lead in the sales funnel.
///
/// The variant order matches the funnel order shown in the pipeline view.
/// Transitions are not constrained: any authorized mutation may set any
/// stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    #[default]
    Nuevo,
    Calificado,
    Contactado,
    Visita,
    Cierre,
}

/// Funnel order used by the pipeline view and the stage report.
pub const ORDERED_STAGES: [LeadStage; 5] = [
    LeadStage::Nuevo,
    LeadStage::Calificado,
    LeadStage::Contactado,
    LeadStage::Visita,
    LeadStage::Cierre,
];

impl LeadStage {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            LeadStage::Nuevo => "nuevo",
            LeadStage::Calificado => "calificado",
            LeadStage::Contactado => "contactado",
            LeadStage::Visita => "visita",
            LeadStage::Cierre => "cierre",
        }
    }

    pub fn from_db_str(value: &str) -> Result<Self> {
        match value {
            "nuevo" => Ok(LeadStage::Nuevo),
            "calificado" => Ok(LeadStage::Calificado),
            "contactado" => Ok(LeadStage::Contactado),
            "visita" => Ok(LeadStage::Visita),
            "cierre" => Ok(LeadStage::Cierre),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown lead stage '{other}'"
            )))),
        }
    }
}

/// Business line a lead belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Emprendimientos,
    Inmuebles,
    Tasaciones,
}

impl AgentType {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            AgentType::Emprendimientos => "emprendimientos",
            AgentType::Inmuebles => "inmuebles",
            AgentType::Tasaciones => "tasaciones",
        }
    }

    pub fn from_db_str(value: &str) -> Result<Self> {
        match value {
            "emprendimientos" => Ok(AgentType::Emprendimientos),
            "inmuebles" => Ok(AgentType::Inmuebles),
            "tasaciones" => Ok(AgentType::Tasaciones),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown agent type '{other}'"
            )))),
        }
    }
}

/// Inbound messaging channel the lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
    Instagram,
    Facebook,
}

impl Channel {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Channel::Whatsapp => "whatsapp",
            Channel::Instagram => "instagram",
            Channel::Facebook => "facebook",
        }
    }

    pub fn from_db_str(value: &str) -> Result<Self> {
        match value {
            "whatsapp" => Ok(Channel::Whatsapp),
            "instagram" => Ok(Channel::Instagram),
            "facebook" => Ok(Channel::Facebook),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown channel '{other}'"
            )))),
        }
    }
}

/// Domain model representing a prospective customer tracked through the
/// sales pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Development or listing the lead asked about.
    pub project: String,
    pub agent_type: AgentType,
    pub channel: Channel,
    /// Qualification heuristic, 0-100.
    pub score: i32,
    pub budget: Option<f64>,
    pub stage: LeadStage,
    /// Profile id of the assigned team member, if any.
    pub assigned_to: Option<String>,
    pub created_at: NaiveDateTime,
    pub last_activity: NaiveDateTime,
    pub notes: Option<String>,
}

fn validate_score(score: i32) -> Result<()> {
    if !(0..=100).contains(&score) {
        return Err(Error::Validation(ValidationError::OutOfRange {
            field: "score".to_string(),
            min: 0,
            max: 100,
        }));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(())
}

/// Input model for creating a new lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub project: String,
    pub agent_type: AgentType,
    pub channel: Channel,
    #[serde(default)]
    pub score: i32,
    pub budget: Option<f64>,
    #[serde(default)]
    pub stage: LeadStage,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

impl NewLead {
    pub fn validate(&self) -> Result<()> {
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_required("project", &self.project)?;
        validate_score(self.score)?;
        if let Some(budget) = self.budget {
            if budget < 0.0 {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Budget cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an existing lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub project: String,
    pub agent_type: AgentType,
    pub channel: Channel,
    pub score: i32,
    pub budget: Option<f64>,
    pub stage: LeadStage,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}

impl LeadUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_required("id", &self.id)?;
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_required("project", &self.project)?;
        validate_score(self.score)?;
        Ok(())
    }
}

/// Simple reduction over a lead collection: counts per stage plus totals.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total: usize,
    pub nuevo: usize,
    pub calificado: usize,
    pub contactado: usize,
    pub visita: usize,
    pub cierre: usize,
    pub average_score: f64,
}

/// Computes stage counts and the mean score for a set of leads.
pub fn lead_stats(leads: &[Lead]) -> LeadStats {
    let mut stats = LeadStats {
        total: leads.len(),
        ..Default::default()
    };
    let mut score_sum: i64 = 0;
    for lead in leads {
        score_sum += lead.score as i64;
        match lead.stage {
            LeadStage::Nuevo => stats.nuevo += 1,
            LeadStage::Calificado => stats.calificado += 1,
            LeadStage::Contactado => stats.contactado += 1,
            LeadStage::Visita => stats.visita += 1,
            LeadStage::Cierre => stats.cierre += 1,
        }
    }
    if !leads.is_empty() {
        stats.average_score = score_sum as f64 / leads.len() as f64;
    }
    stats
}
