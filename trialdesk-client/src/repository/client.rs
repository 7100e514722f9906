//! Client endpoints

use trialdesk_core::dto::client::{ClientResponseDto, CreateClientDto, UpdateClientDto};

use super::resource_path;
use crate::base::BaseRepository;
use crate::error::Result;

/// CRUD access to `/Client`
#[derive(Debug, Clone)]
pub struct ClientRepository {
    base: BaseRepository,
}

impl ClientRepository {
    /// Endpoint segment; requests go to `/Client/...` under the base URL
    pub const ENDPOINT: &'static str = "Client";

    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    /// The base layer this repository delegates to
    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    /// List all clients
    pub async fn get_all(&self) -> Result<Vec<ClientResponseDto>> {
        self.base.get(&[Self::ENDPOINT]).await
    }

    /// Get a client by ID
    pub async fn get_by_id(&self, id: &str) -> Result<ClientResponseDto> {
        self.base.get(&resource_path(Self::ENDPOINT, id)).await
    }

    /// Create a new client
    ///
    /// # Example
    /// ```no_run
    /// # use trialdesk_client::{BaseRepository, ClientRepository};
    /// # use trialdesk_core::dto::CreateClientDto;
    /// # async fn example() -> trialdesk_client::Result<()> {
    /// let clients = ClientRepository::new(BaseRepository::new("http://localhost:5000"));
    /// let client = clients.create(&CreateClientDto::new("Acme Pharma")).await?;
    /// println!("created client {}", client.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, dto: &CreateClientDto) -> Result<ClientResponseDto> {
        self.base.post(&[Self::ENDPOINT], dto).await
    }

    /// Update a client; the response body is discarded
    pub async fn update(&self, id: &str, dto: &UpdateClientDto) -> Result<()> {
        self.base.put_empty(&resource_path(Self::ENDPOINT, id), dto).await
    }

    /// Delete a client
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.base.delete_empty(&resource_path(Self::ENDPOINT, id)).await
    }
}
