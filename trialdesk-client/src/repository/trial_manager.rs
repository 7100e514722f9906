//! TrialManager endpoints

use trialdesk_core::dto::trial_manager::{
    CreateTrialManagerDto, TrialManagerResponseDto, UpdateTrialManagerDto,
};

use super::{filter_path, resource_path};
use crate::base::BaseRepository;
use crate::error::Result;

/// CRUD access to `/TrialManager`
#[derive(Debug, Clone)]
pub struct TrialManagerRepository {
    base: BaseRepository,
}

impl TrialManagerRepository {
    /// Endpoint segment; requests go to `/TrialManager/...` under the base URL
    pub const ENDPOINT: &'static str = "TrialManager";

    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    pub async fn get_all(&self) -> Result<Vec<TrialManagerResponseDto>> {
        self.base.get(&[Self::ENDPOINT]).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<TrialManagerResponseDto> {
        self.base.get(&resource_path(Self::ENDPOINT, id)).await
    }

    /// Get the trial manager assigned to a client
    ///
    /// Clients have exactly one trial manager, so this returns a single record.
    pub async fn get_by_client(&self, client_id: &str) -> Result<TrialManagerResponseDto> {
        self.base
            .get(&filter_path(Self::ENDPOINT, "by-client", client_id))
            .await
    }

    pub async fn create(&self, dto: &CreateTrialManagerDto) -> Result<TrialManagerResponseDto> {
        self.base.post(&[Self::ENDPOINT], dto).await
    }

    pub async fn update(&self, id: &str, dto: &UpdateTrialManagerDto) -> Result<()> {
        self.base.put_empty(&resource_path(Self::ENDPOINT, id), dto).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.base.delete_empty(&resource_path(Self::ENDPOINT, id)).await
    }
}
