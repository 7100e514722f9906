//! IRT DTOs
//!
//! An IRT (interactive response technology) system handles randomization
//! and supply for one study, and is also linked to the study's client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An IRT system as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrtResponseDto {
    pub id: String,
    pub name: String,

    /// Vendor operating the system
    pub vendor: Option<String>,

    pub study_id: String,
    pub client_id: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a new IRT system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIrtDto {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    pub study_id: String,
    pub client_id: String,
}

impl CreateIrtDto {
    /// Create a request for an IRT system attached to `study_id` of `client_id`
    pub fn for_study(
        client_id: impl Into<String>,
        study_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vendor: None,
            study_id: study_id.into(),
            client_id: client_id.into(),
        }
    }
}

/// Partial update of an existing IRT system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIrtDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl UpdateIrtDto {
    /// Whether this patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.vendor.is_none()
            && self.study_id.is_none()
            && self.client_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_study_sets_both_relations() {
        let dto = CreateIrtDto::for_study("c1", "s1", "RTSM");
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "name": "RTSM", "studyId": "s1", "clientId": "c1" })
        );
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let patch = UpdateIrtDto {
            vendor: Some("Suvoda".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "vendor": "Suvoda" }));
    }
}
