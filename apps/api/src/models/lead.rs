use serde::{Deserialize, Serialize};

/// A caller-supplied snapshot of a sales lead. Never persisted — it exists
/// only for the duration of one request.
///
/// Absent optional fields get deterministic defaults so the same partial
/// input always interpolates to the same prompt text: status falls back to
/// "new", score and value to zero, tags to empty, notes to a fixed
/// placeholder. The raw status string is kept as-sent so an unrecognized
/// stage still interpolates verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_status")]
    pub status: String,
    /// Lead score on a 0-100 scale. Not range-checked.
    #[serde(default)]
    pub score: u32,
    /// Estimated deal value in dollars.
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub last_contact: Option<String>,
    #[serde(default)]
    pub next_follow_up: Option<String>,
    #[serde(default = "default_notes")]
    pub notes: String,
}

fn default_status() -> String {
    "new".to_string()
}

fn default_notes() -> String {
    "No additional notes".to_string()
}

impl LeadSnapshot {
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }

    pub fn last_contact_text(&self) -> &str {
        self.last_contact.as_deref().unwrap_or("None")
    }

    pub fn next_follow_up_text(&self) -> &str {
        self.next_follow_up.as_deref().unwrap_or("None")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gets_all_defaults() {
        let lead: LeadSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(lead.name, "");
        assert_eq!(lead.company, "");
        assert_eq!(lead.email, "");
        assert_eq!(lead.status, "new");
        assert_eq!(lead.score, 0);
        assert_eq!(lead.value, 0.0);
        assert!(lead.tags.is_empty());
        assert_eq!(lead.last_contact, None);
        assert_eq!(lead.next_follow_up, None);
        assert_eq!(lead.notes, "No additional notes");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = r#"{
            "name": "John Doe",
            "company": "Acme Inc",
            "email": "john@acme.com",
            "status": "qualified",
            "score": 85,
            "value": 50000,
            "tags": ["enterprise", "warm"],
            "lastContact": "2025-05-01",
            "nextFollowUp": "2025-05-15",
            "notes": "Asked for pricing"
        }"#;
        let lead: LeadSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(lead.last_contact.as_deref(), Some("2025-05-01"));
        assert_eq!(lead.next_follow_up.as_deref(), Some("2025-05-15"));
        assert_eq!(lead.score, 85);
        assert_eq!(lead.value, 50000.0);
    }

    #[test]
    fn test_unrecognized_status_preserved_verbatim() {
        let lead: LeadSnapshot = serde_json::from_str(r#"{"status": "archived"}"#).unwrap();
        assert_eq!(lead.status, "archived");
    }

    #[test]
    fn test_optional_text_accessors_default_to_none_literal() {
        let lead: LeadSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(lead.last_contact_text(), "None");
        assert_eq!(lead.next_follow_up_text(), "None");
    }

    #[test]
    fn test_tags_joined_with_comma_separator() {
        let lead: LeadSnapshot =
            serde_json::from_str(r#"{"tags": ["saas", "mid-market", "inbound"]}"#).unwrap();
        assert_eq!(lead.tags_joined(), "saas, mid-market, inbound");
    }
}
