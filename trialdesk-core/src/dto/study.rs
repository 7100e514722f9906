//! Study DTOs
//!
//! A study belongs to exactly one client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A study as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyResponseDto {
    pub id: String,
    pub name: String,

    /// Sponsor protocol number (e.g. "ACM-301")
    pub protocol_number: Option<String>,

    /// Clinical phase label (e.g. "II", "III")
    pub phase: Option<String>,

    /// Owning client
    pub client_id: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a new study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudyDto {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    pub client_id: String,
}

impl CreateStudyDto {
    /// Create a request for a study owned by `client_id`
    pub fn for_client(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client_id: client_id.into(),
            ..Default::default()
        }
    }
}

/// Partial update of an existing study
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudyDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl UpdateStudyDto {
    /// Whether this patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.protocol_number.is_none()
            && self.phase.is_none()
            && self.client_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_client_sets_relation() {
        let dto = CreateStudyDto::for_client("c1", "Phase III efficacy");
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "name": "Phase III efficacy", "clientId": "c1" })
        );
    }

    #[test]
    fn test_response_requires_client_id() {
        let result = serde_json::from_value::<StudyResponseDto>(json!({
            "id": "s1",
            "name": "Phase III efficacy"
        }));
        assert!(result.is_err());
    }
}
