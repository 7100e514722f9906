//! Study endpoints

use trialdesk_core::dto::study::{CreateStudyDto, StudyResponseDto, UpdateStudyDto};

use super::{filter_path, resource_path};
use crate::base::BaseRepository;
use crate::error::Result;

/// CRUD access to `/Study`
#[derive(Debug, Clone)]
pub struct StudyRepository {
    base: BaseRepository,
}

impl StudyRepository {
    /// Endpoint segment; requests go to `/Study/...` under the base URL
    pub const ENDPOINT: &'static str = "Study";

    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    pub async fn get_all(&self) -> Result<Vec<StudyResponseDto>> {
        self.base.get(&[Self::ENDPOINT]).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<StudyResponseDto> {
        self.base.get(&resource_path(Self::ENDPOINT, id)).await
    }

    /// List the studies owned by a client
    pub async fn get_by_client(&self, client_id: &str) -> Result<Vec<StudyResponseDto>> {
        self.base
            .get(&filter_path(Self::ENDPOINT, "by-client", client_id))
            .await
    }

    pub async fn create(&self, dto: &CreateStudyDto) -> Result<StudyResponseDto> {
        self.base.post(&[Self::ENDPOINT], dto).await
    }

    /// Update a study; the response body is discarded
    pub async fn update(&self, id: &str, dto: &UpdateStudyDto) -> Result<()> {
        self.base.put_empty(&resource_path(Self::ENDPOINT, id), dto).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.base.delete_empty(&resource_path(Self::ENDPOINT, id)).await
    }
}
