//! TrialManager DTOs
//!
//! Each client has exactly one trial manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trial manager as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialManagerResponseDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,

    /// The client this manager is assigned to
    pub client_id: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a new trial manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrialManagerDto {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub client_id: String,
}

impl CreateTrialManagerDto {
    pub fn for_client(client_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            client_id: client_id.into(),
        }
    }
}

/// Partial update of an existing trial manager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrialManagerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl UpdateTrialManagerDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.client_id.is_none()
    }
}
