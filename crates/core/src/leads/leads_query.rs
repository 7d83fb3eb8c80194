//! In-memory filter and sort pipeline for the leads table.
//!
//! Mirrors the table view: a conjunction of optional predicates over the
//! full lead collection, followed by a single-field sort with a direction
//! toggle. Filtering and sorting never round-trip to storage.

use serde::{Deserialize, Serialize};

use super::leads_model::{AgentType, Channel, Lead, LeadStage};

/// Score buckets used by the table's score filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBucket {
    /// score >= 80
    Hot,
    /// 50 <= score < 80
    Warm,
    /// score < 50
    Cold,
}

impl ScoreBucket {
    pub fn contains(&self, score: i32) -> bool {
        match self {
            ScoreBucket::Hot => score >= 80,
            ScoreBucket::Warm => (50..80).contains(&score),
            ScoreBucket::Cold => score < 50,
        }
    }
}

/// Active filters for the leads table. Every field is optional; the
/// effective predicate is the logical AND of all present fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFilters {
    /// Case-insensitive substring match over name, phone, email and project.
    pub search: Option<String>,
    pub stage: Option<LeadStage>,
    pub agent_type: Option<AgentType>,
    pub project: Option<String>,
    pub channel: Option<Channel>,
    pub score_bucket: Option<ScoreBucket>,
    pub assigned_to: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
}

impl LeadFilters {
    /// True when the lead satisfies every active predicate.
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(ref needle) = self.search {
            let needle = needle.to_lowercase();
            if !needle.is_empty() {
                let in_email = lead
                    .email
                    .as_deref()
                    .map(|e| e.to_lowercase().contains(&needle))
                    .unwrap_or(false);
                let hit = lead.name.to_lowercase().contains(&needle)
                    || lead.phone.to_lowercase().contains(&needle)
                    || lead.project.to_lowercase().contains(&needle)
                    || in_email;
                if !hit {
                    return false;
                }
            }
        }
        if let Some(stage) = self.stage {
            if lead.stage != stage {
                return false;
            }
        }
        if let Some(agent_type) = self.agent_type {
            if lead.agent_type != agent_type {
                return false;
            }
        }
        if let Some(ref project) = self.project {
            if !lead.project.eq_ignore_ascii_case(project) {
                return false;
            }
        }
        if let Some(channel) = self.channel {
            if lead.channel != channel {
                return false;
            }
        }
        if let Some(bucket) = self.score_bucket {
            if !bucket.contains(lead.score) {
                return false;
            }
        }
        if let Some(ref assignee) = self.assigned_to {
            if lead.assigned_to.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.budget_min {
            match lead.budget {
                Some(b) if b >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.budget_max {
            match lead.budget {
                Some(b) if b <= max => {}
                _ => return false,
            }
        }
        true
    }
}

/// Sortable columns of the leads table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Score,
    Name,
    CreatedAt,
    LastActivity,
    Budget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

/// A search request against the lead collection: filters plus an optional
/// sort.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQuery {
    #[serde(default)]
    pub filters: LeadFilters,
    pub sort: Option<Sort>,
}

/// Sorts leads in place by a single field.
///
/// Uses an unstable sort: rows with equal keys may appear in either order,
/// so toggling the direction reverses the ordering only up to ties.
pub fn sort_leads(leads: &mut [Lead], sort: Sort) {
    leads.sort_unstable_by(|a, b| {
        let ord = match sort.field {
            SortField::Score => a.score.cmp(&b.score),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::LastActivity => a.last_activity.cmp(&b.last_activity),
            SortField::Budget => a
                .budget
                .unwrap_or(f64::NEG_INFINITY)
                .partial_cmp(&b.budget.unwrap_or(f64::NEG_INFINITY))
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Filter-then-sort pipeline over the full lead collection.
pub fn apply_query(leads: Vec<Lead>, query: &LeadQuery) -> Vec<Lead> {
    let mut rows: Vec<Lead> = leads
        .into_iter()
        .filter(|lead| query.filters.matches(lead))
        .collect();
    if let Some(sort) = query.sort {
        sort_leads(&mut rows, sort);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lead(name: &str, score: i32, stage: LeadStage, channel: Channel) -> Lead {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Lead {
            id: format!("lead-{name}"),
            name: name.to_string(),
            phone: "+54911555000".to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            project: "Torre Alvear".to_string(),
            agent_type: AgentType::Emprendimientos,
            channel,
            score,
            budget: Some(100_000.0 + score as f64),
            stage,
            assigned_to: None,
            created_at: ts,
            last_activity: ts,
            notes: None,
        }
    }

    fn sample() -> Vec<Lead> {
        vec![
            lead("Ana", 92, LeadStage::Calificado, Channel::Whatsapp),
            lead("Bruno", 55, LeadStage::Nuevo, Channel::Instagram),
            lead("Carla", 55, LeadStage::Visita, Channel::Whatsapp),
            lead("Diego", 30, LeadStage::Nuevo, Channel::Facebook),
        ]
    }

    #[test]
    fn filters_are_a_conjunction() {
        let filters = LeadFilters {
            channel: Some(Channel::Whatsapp),
            score_bucket: Some(ScoreBucket::Warm),
            ..Default::default()
        };
        let matched: Vec<_> = sample().into_iter().filter(|l| filters.matches(l)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Carla");
    }

    #[test]
    fn empty_filters_match_everything() {
        let leads = sample();
        let query = LeadQuery::default();
        assert_eq!(apply_query(leads.clone(), &query).len(), leads.len());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let filters = LeadFilters {
            search: Some("BRUNO@EXAMPLE".to_string()),
            ..Default::default()
        };
        let matched: Vec<_> = sample().into_iter().filter(|l| filters.matches(l)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Bruno");
    }

    #[test]
    fn budget_range_requires_a_budget() {
        let mut rows = sample();
        rows[0].budget = None;
        let filters = LeadFilters {
            budget_min: Some(0.0),
            ..Default::default()
        };
        let matched: Vec<_> = rows.into_iter().filter(|l| filters.matches(l)).collect();
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn score_sort_reverses_up_to_ties() {
        let mut desc = sample();
        sort_leads(
            &mut desc,
            Sort {
                field: SortField::Score,
                direction: SortDirection::Desc,
            },
        );
        let mut asc = sample();
        sort_leads(
            &mut asc,
            Sort {
                field: SortField::Score,
                direction: SortDirection::Asc,
            },
        );
        let desc_scores: Vec<i32> = desc.iter().map(|l| l.score).collect();
        let mut asc_scores: Vec<i32> = asc.iter().map(|l| l.score).collect();
        asc_scores.reverse();
        // Tied scores may land in either order; the score sequence itself
        // must still be the exact reverse.
        assert_eq!(desc_scores, asc_scores);
        assert_eq!(desc_scores, vec![92, 55, 55, 30]);
    }

    #[test]
    fn score_buckets_cover_the_range() {
        assert!(ScoreBucket::Hot.contains(80));
        assert!(ScoreBucket::Warm.contains(79));
        assert!(ScoreBucket::Warm.contains(50));
        assert!(ScoreBucket::Cold.contains(49));
        assert!(!ScoreBucket::Cold.contains(50));
    }
}
