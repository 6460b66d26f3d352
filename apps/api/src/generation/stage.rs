//! Pipeline stage parsing and stage → email-template dispatch.

use crate::generation::prompts::{
    EMAIL_CLOSED_TEMPLATE, EMAIL_CONTACTED_TEMPLATE, EMAIL_GENERIC_TEMPLATE,
    EMAIL_NEGOTIATION_TEMPLATE, EMAIL_NEW_TEMPLATE, EMAIL_PROPOSAL_TEMPLATE,
    EMAIL_QUALIFIED_TEMPLATE,
};

/// A lead's position in the sales pipeline.
///
/// Parsed from the caller's raw status string; an unrecognized value parses
/// to `None` and dispatches to the generic template instead of silently
/// producing a wrong stage-specific one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Closed,
}

impl Stage {
    pub fn parse(status: &str) -> Option<Stage> {
        match status {
            "new" => Some(Stage::New),
            "contacted" => Some(Stage::Contacted),
            "qualified" => Some(Stage::Qualified),
            "proposal" => Some(Stage::Proposal),
            "negotiation" => Some(Stage::Negotiation),
            "closed" => Some(Stage::Closed),
            _ => None,
        }
    }
}

/// Returns the email template for a stage. `None` (unrecognized status)
/// gets the generic follow-up template.
pub fn email_template(stage: Option<Stage>) -> &'static str {
    match stage {
        Some(Stage::New) => EMAIL_NEW_TEMPLATE,
        Some(Stage::Contacted) => EMAIL_CONTACTED_TEMPLATE,
        Some(Stage::Qualified) => EMAIL_QUALIFIED_TEMPLATE,
        Some(Stage::Proposal) => EMAIL_PROPOSAL_TEMPLATE,
        Some(Stage::Negotiation) => EMAIL_NEGOTIATION_TEMPLATE,
        Some(Stage::Closed) => EMAIL_CLOSED_TEMPLATE,
        None => EMAIL_GENERIC_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_six_stages_parse() {
        assert_eq!(Stage::parse("new"), Some(Stage::New));
        assert_eq!(Stage::parse("contacted"), Some(Stage::Contacted));
        assert_eq!(Stage::parse("qualified"), Some(Stage::Qualified));
        assert_eq!(Stage::parse("proposal"), Some(Stage::Proposal));
        assert_eq!(Stage::parse("negotiation"), Some(Stage::Negotiation));
        assert_eq!(Stage::parse("closed"), Some(Stage::Closed));
    }

    #[test]
    fn test_unrecognized_status_parses_to_none() {
        assert_eq!(Stage::parse("archived"), None);
        assert_eq!(Stage::parse(""), None);
        // Matching is case-sensitive, like the pipeline values stored by callers
        assert_eq!(Stage::parse("New"), None);
    }

    #[test]
    fn test_new_template_mentions_discovery_call() {
        assert!(email_template(Some(Stage::New)).contains("discovery call"));
    }

    #[test]
    fn test_contacted_template_references_previous_communication() {
        assert!(email_template(Some(Stage::Contacted)).contains("previous communication"));
    }

    #[test]
    fn test_qualified_template_suggests_product_demo() {
        assert!(email_template(Some(Stage::Qualified)).contains("product demo"));
    }

    #[test]
    fn test_proposal_template_checks_review_process() {
        assert!(email_template(Some(Stage::Proposal)).contains("review process"));
    }

    #[test]
    fn test_negotiation_template_is_partnership_focused() {
        assert!(email_template(Some(Stage::Negotiation)).contains("partnership"));
    }

    #[test]
    fn test_closed_template_mentions_onboarding_and_next_steps() {
        let template = email_template(Some(Stage::Closed));
        assert!(template.contains("onboarding"));
        assert!(template.contains("next steps"));
    }

    #[test]
    fn test_unrecognized_stage_falls_back_to_generic() {
        let template = email_template(Stage::parse("archived"));
        assert!(template.starts_with("Write a professional follow-up email"));
    }

    #[test]
    fn test_every_template_mandates_a_subject_line() {
        let stages = [
            Some(Stage::New),
            Some(Stage::Contacted),
            Some(Stage::Qualified),
            Some(Stage::Proposal),
            Some(Stage::Negotiation),
            Some(Stage::Closed),
            None,
        ];
        for stage in stages {
            assert!(
                email_template(stage).contains("Include subject line at the top."),
                "template for {stage:?} must mandate a subject line"
            );
        }
    }

    #[test]
    fn test_templates_are_structurally_distinct() {
        let stages = [
            Stage::New,
            Stage::Contacted,
            Stage::Qualified,
            Stage::Proposal,
            Stage::Negotiation,
            Stage::Closed,
        ];
        for (i, a) in stages.iter().enumerate() {
            for b in stages.iter().skip(i + 1) {
                assert_ne!(
                    email_template(Some(*a)),
                    email_template(Some(*b)),
                    "{a:?} and {b:?} must not share a template"
                );
            }
        }
    }
}
