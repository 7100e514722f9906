//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod client;
mod irt;
mod study;
mod trial_manager;

pub use client::ClientCommands;
pub use irt::IrtCommands;
pub use study::StudyCommands;
pub use trial_manager::TrialManagerCommands;

use anyhow::Result;
use clap::Subcommand;
use tracing::debug;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Client management
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },
    /// Study management
    Study {
        #[command(subcommand)]
        command: StudyCommands,
    },
    /// IRT system management
    Irt {
        #[command(subcommand)]
        command: IrtCommands,
    },
    /// Trial manager management
    TrialManager {
        #[command(subcommand)]
        command: TrialManagerCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let repos = config.repositories()?;
    debug!(api_url = %config.api_url, "repositories initialized");

    match command {
        Commands::Client { command } => {
            client::handle_client_command(command, &repos.clients).await
        }
        Commands::Study { command } => study::handle_study_command(command, &repos.studies).await,
        Commands::Irt { command } => irt::handle_irt_command(command, &repos.irts).await,
        Commands::TrialManager { command } => {
            trial_manager::handle_trial_manager_command(command, &repos.trial_managers).await
        }
    }
}
