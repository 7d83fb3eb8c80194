//! CSV export for the leads table.
//!
//! Serializes the currently filtered and sorted rows. One header line plus
//! one line per lead; fields containing separators or quotes are quoted by
//! the csv writer.

use csv::WriterBuilder;

use super::leads_model::Lead;
use crate::Result;

const HEADERS: [&str; 12] = [
    "id",
    "name",
    "phone",
    "email",
    "project",
    "agentType",
    "channel",
    "score",
    "budget",
    "stage",
    "assignedTo",
    "createdAt",
];

/// Renders the given rows as a CSV document, in table column order.
pub fn export_csv(leads: &[Lead]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for lead in leads {
        writer.write_record([
            lead.id.as_str(),
            lead.name.as_str(),
            lead.phone.as_str(),
            lead.email.as_deref().unwrap_or(""),
            lead.project.as_str(),
            lead.agent_type.as_db_str(),
            lead.channel.as_db_str(),
            &lead.score.to_string(),
            &lead.budget.map(|b| b.to_string()).unwrap_or_default(),
            lead.stage.as_db_str(),
            lead.assigned_to.as_deref().unwrap_or(""),
            &lead.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::Error::CsvExport(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| crate::Error::CsvExport(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::leads_model::{AgentType, Channel, LeadStage};
    use chrono::NaiveDate;

    fn lead(name: &str) -> Lead {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Lead {
            id: "l1".to_string(),
            name: name.to_string(),
            phone: "+54911555000".to_string(),
            email: None,
            project: "Palermo Soho".to_string(),
            agent_type: AgentType::Inmuebles,
            channel: Channel::Instagram,
            score: 70,
            budget: None,
            stage: LeadStage::Contactado,
            assigned_to: None,
            created_at: ts,
            last_activity: ts,
            notes: None,
        }
    }

    #[test]
    fn line_count_is_rows_plus_header() {
        let rows = vec![lead("Ana"), lead("Bruno"), lead("Carla")];
        let csv = export_csv(&rows).unwrap();
        assert_eq!(csv.lines().count(), rows.len() + 1);
        assert!(csv.starts_with("id,name,phone"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let rows = vec![lead("Perez, Ana")];
        let csv = export_csv(&rows).unwrap();
        assert!(csv.contains("\"Perez, Ana\""));
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let csv = export_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
