//! Tests for lead domain models: wire names, validation bounds, stats.

#[cfg(test)]
mod tests {
    use crate::leads::{
        lead_stats, AgentType, Channel, Lead, LeadStage, NewLead, ORDERED_STAGES,
    };
    use chrono::NaiveDate;

    fn new_lead() -> NewLead {
        NewLead {
            id: None,
            name: "Ana Torres".to_string(),
            phone: "+5491155550000".to_string(),
            email: None,
            project: "Torre Alvear".to_string(),
            agent_type: AgentType::Emprendimientos,
            channel: Channel::Whatsapp,
            score: 50,
            budget: None,
            stage: LeadStage::Nuevo,
            assigned_to: None,
            notes: None,
        }
    }

    #[test]
    fn stage_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LeadStage::Calificado).unwrap(),
            "\"calificado\""
        );
        assert_eq!(
            serde_json::from_str::<LeadStage>("\"cierre\"").unwrap(),
            LeadStage::Cierre
        );
    }

    #[test]
    fn channel_and_agent_type_round_trip() {
        for channel in [Channel::Whatsapp, Channel::Instagram, Channel::Facebook] {
            assert_eq!(Channel::from_db_str(channel.as_db_str()).unwrap(), channel);
        }
        for agent_type in [
            AgentType::Emprendimientos,
            AgentType::Inmuebles,
            AgentType::Tasaciones,
        ] {
            assert_eq!(
                AgentType::from_db_str(agent_type.as_db_str()).unwrap(),
                agent_type
            );
        }
    }

    #[test]
    fn unknown_stage_is_rejected() {
        assert!(LeadStage::from_db_str("ganado").is_err());
    }

    #[test]
    fn funnel_order_starts_at_nuevo_and_ends_at_cierre() {
        assert_eq!(ORDERED_STAGES.first(), Some(&LeadStage::Nuevo));
        assert_eq!(ORDERED_STAGES.last(), Some(&LeadStage::Cierre));
    }

    #[test]
    fn score_must_stay_within_bounds() {
        let mut lead = new_lead();
        lead.score = 101;
        assert!(lead.validate().is_err());
        lead.score = -1;
        assert!(lead.validate().is_err());
        lead.score = 100;
        assert!(lead.validate().is_ok());
        lead.score = 0;
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn name_phone_and_project_are_required() {
        let mut lead = new_lead();
        lead.name = "  ".to_string();
        assert!(lead.validate().is_err());

        let mut lead = new_lead();
        lead.phone = String::new();
        assert!(lead.validate().is_err());

        let mut lead = new_lead();
        lead.project = String::new();
        assert!(lead.validate().is_err());
    }

    #[test]
    fn negative_budget_is_rejected() {
        let mut lead = new_lead();
        lead.budget = Some(-1.0);
        assert!(lead.validate().is_err());
    }

    #[test]
    fn stats_count_per_stage_and_average_score() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let base = Lead {
            id: "x".to_string(),
            name: "x".to_string(),
            phone: "x".to_string(),
            email: None,
            project: "x".to_string(),
            agent_type: AgentType::Inmuebles,
            channel: Channel::Facebook,
            score: 0,
            budget: None,
            stage: LeadStage::Nuevo,
            assigned_to: None,
            created_at: ts,
            last_activity: ts,
            notes: None,
        };
        let leads = vec![
            Lead {
                score: 80,
                stage: LeadStage::Nuevo,
                ..base.clone()
            },
            Lead {
                score: 40,
                stage: LeadStage::Cierre,
                ..base.clone()
            },
            Lead {
                score: 60,
                stage: LeadStage::Cierre,
                ..base
            },
        ];
        let stats = lead_stats(&leads);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.nuevo, 1);
        assert_eq!(stats.cierre, 2);
        assert_eq!(stats.calificado, 0);
        assert!((stats.average_score - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_stats_are_all_zero() {
        let stats = lead_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_score, 0.0);
    }
}
