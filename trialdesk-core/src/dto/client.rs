//! Client DTOs
//!
//! A client is the sponsor organisation that owns studies, IRT systems
//! and exactly one trial manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponseDto {
    /// Server-assigned identifier
    pub id: String,

    /// Display name of the client
    pub name: String,

    /// Short internal code (e.g. "ACME")
    pub code: Option<String>,

    /// Primary contact address
    pub contact_email: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a new client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientDto {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl CreateClientDto {
    /// Create a request carrying only the client name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial update of an existing client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl UpdateClientDto {
    /// Whether this patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none() && self.contact_email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_decodes_camel_case_and_ignores_unknown_fields() {
        let dto: ClientResponseDto = serde_json::from_value(json!({
            "id": "c1",
            "name": "Acme Pharma",
            "contactEmail": "ops@acme.test",
            "createdAt": "2024-03-01T10:00:00Z",
            "internalFlag": true
        }))
        .unwrap();

        assert_eq!(dto.id, "c1");
        assert_eq!(dto.contact_email.as_deref(), Some("ops@acme.test"));
        assert!(dto.code.is_none());
        assert!(dto.created_at.is_some());
        assert!(dto.updated_at.is_none());
    }

    #[test]
    fn test_create_omits_unset_optionals() {
        let body = serde_json::to_value(CreateClientDto::new("Acme Pharma")).unwrap();
        assert_eq!(body, json!({ "name": "Acme Pharma" }));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateClientDto::default().is_empty());

        let patch = UpdateClientDto {
            code: Some("ACME".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "code": "ACME" }));
    }
}
