//! TrialDesk CLI
//!
//! Command-line interface for managing clients, studies, IRT systems and
//! trial managers through the TrialDesk API.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trialdesk_client::config::API_URL_ENV;

#[derive(Parser)]
#[command(name = "trialdesk")]
#[command(about = "TrialDesk API command-line client", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = API_URL_ENV, default_value = "http://localhost:5000")]
    api_url: String,

    /// Log every request sent to the API
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Target prefix also matches trialdesk_client
    let default_filter = if cli.verbose {
        "trialdesk=debug"
    } else {
        "trialdesk=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        api_url: cli.api_url,
    };

    handle_command(cli.command, &config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_study_list_by_client() {
        let cli = Cli::try_parse_from([
            "trialdesk",
            "--api-url",
            "http://api.test",
            "study",
            "list",
            "--client",
            "c1",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://api.test");
        assert!(matches!(
            cli.command,
            Commands::Study {
                command: commands::StudyCommands::List { client: Some(ref c), json: false }
            } if c == "c1"
        ));
    }

    #[test]
    fn test_irt_list_rejects_both_filters() {
        let result = Cli::try_parse_from([
            "trialdesk", "irt", "list", "--client", "c1", "--study", "s1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_trial_manager_get_requires_id_or_client() {
        assert!(Cli::try_parse_from(["trialdesk", "trial-manager", "get"]).is_err());
        assert!(Cli::try_parse_from(["trialdesk", "trial-manager", "get", "--client", "c1"]).is_ok());
        assert!(Cli::try_parse_from(["trialdesk", "trial-manager", "get", "tm1"]).is_ok());
    }
}
