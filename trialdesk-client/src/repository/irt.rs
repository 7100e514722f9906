//! IRT endpoints

use trialdesk_core::dto::irt::{CreateIrtDto, IrtResponseDto, UpdateIrtDto};

use super::{filter_path, resource_path};
use crate::base::BaseRepository;
use crate::error::Result;

/// CRUD access to `/IRT`
#[derive(Debug, Clone)]
pub struct IrtRepository {
    base: BaseRepository,
}

impl IrtRepository {
    /// Endpoint segment; requests go to `/IRT/...` under the base URL
    pub const ENDPOINT: &'static str = "IRT";

    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    // =============================================================================
    // Queries
    // =============================================================================

    /// List all IRT systems
    pub async fn get_all(&self) -> Result<Vec<IrtResponseDto>> {
        self.base.get(&[Self::ENDPOINT]).await
    }

    /// Get an IRT system by ID
    pub async fn get_by_id(&self, id: &str) -> Result<IrtResponseDto> {
        self.base.get(&resource_path(Self::ENDPOINT, id)).await
    }

    /// List the IRT systems of a client, across all of its studies
    pub async fn get_by_client(&self, client_id: &str) -> Result<Vec<IrtResponseDto>> {
        self.base
            .get(&filter_path(Self::ENDPOINT, "by-client", client_id))
            .await
    }

    /// List the IRT systems attached to a study
    pub async fn get_by_study(&self, study_id: &str) -> Result<Vec<IrtResponseDto>> {
        self.base
            .get(&filter_path(Self::ENDPOINT, "by-study", study_id))
            .await
    }

    // =============================================================================
    // Mutations
    // =============================================================================

    /// Create a new IRT system
    pub async fn create(&self, dto: &CreateIrtDto) -> Result<IrtResponseDto> {
        self.base.post(&[Self::ENDPOINT], dto).await
    }

    /// Update an IRT system; the response body is discarded
    pub async fn update(&self, id: &str, dto: &UpdateIrtDto) -> Result<()> {
        self.base.put_empty(&resource_path(Self::ENDPOINT, id), dto).await
    }

    /// Delete an IRT system
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.base.delete_empty(&resource_path(Self::ENDPOINT, id)).await
    }
}
