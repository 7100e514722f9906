//! TrialDesk HTTP Client
//!
//! Typed repositories for the TrialDesk REST backend.
//!
//! A single [`BaseRepository`] issues JSON requests against the configured
//! base URL. The entity repositories ([`ClientRepository`],
//! [`StudyRepository`], [`IrtRepository`], [`TrialManagerRepository`]) hold
//! a clone of it and map each method onto exactly one REST call.
//!
//! # Example
//!
//! ```no_run
//! use trialdesk_client::{ApiConfig, Repositories};
//!
//! #[tokio::main]
//! async fn main() -> trialdesk_client::Result<()> {
//!     let repos = Repositories::from_config(&ApiConfig::new("http://localhost:5000"))?;
//!
//!     for study in repos.studies.get_by_client("c1").await? {
//!         println!("{} ({})", study.name, study.id);
//!     }
//!     Ok(())
//! }
//! ```

mod base;
pub mod config;
pub mod error;
pub mod repository;

// Re-export commonly used types
pub use base::BaseRepository;
pub use config::ApiConfig;
pub use error::{ClientError, Result};
pub use repository::{
    ClientRepository, IrtRepository, Repositories, StudyRepository, TrialManagerRepository,
};
