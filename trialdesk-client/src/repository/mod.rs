//! Entity repositories
//!
//! Each repository wraps a [`BaseRepository`] and a fixed endpoint. Methods
//! build the target path and delegate; there is no validation, caching or
//! error translation at this layer.

mod client;
mod irt;
mod study;
mod trial_manager;

pub use client::ClientRepository;
pub use irt::IrtRepository;
pub use study::StudyRepository;
pub use trial_manager::TrialManagerRepository;

use crate::base::BaseRepository;
use crate::config::ApiConfig;
use crate::error::Result;

/// All entity repositories over one shared base layer
#[derive(Debug, Clone)]
pub struct Repositories {
    pub clients: ClientRepository,
    pub studies: StudyRepository,
    pub irts: IrtRepository,
    pub trial_managers: TrialManagerRepository,
}

impl Repositories {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            clients: ClientRepository::new(base.clone()),
            studies: StudyRepository::new(base.clone()),
            irts: IrtRepository::new(base.clone()),
            trial_managers: TrialManagerRepository::new(base),
        }
    }

    /// Build all repositories from a validated configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(BaseRepository::from_config(config)?))
    }
}

/// Path of a single resource under an endpoint (e.g. `/Client/c1`)
pub(crate) fn resource_path<'a>(endpoint: &'a str, id: &'a str) -> [&'a str; 2] {
    [endpoint, id]
}

/// Path of a relation filter under an endpoint (e.g. `/Study/by-client/c1`)
pub(crate) fn filter_path<'a>(endpoint: &'a str, filter: &'a str, id: &'a str) -> [&'a str; 3] {
    [endpoint, filter, id]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(resource_path("Client", "c1"), ["Client", "c1"]);
        assert_eq!(filter_path("IRT", "by-study", "s1"), ["IRT", "by-study", "s1"]);
    }

    #[test]
    fn test_repositories_share_base_url() {
        let repos = Repositories::new(BaseRepository::new("http://localhost:5000/"));
        assert_eq!(repos.clients.base().base_url(), "http://localhost:5000");
        assert_eq!(repos.trial_managers.base().base_url(), "http://localhost:5000");
    }
}
