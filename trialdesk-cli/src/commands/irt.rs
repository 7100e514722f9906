//! IRT command handlers

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use trialdesk_client::IrtRepository;
use trialdesk_core::dto::irt::{CreateIrtDto, IrtResponseDto, UpdateIrtDto};

use crate::output::{print_empty, print_field, print_json, print_success, print_timestamp};

/// IRT subcommands
#[derive(Subcommand)]
pub enum IrtCommands {
    /// List IRT systems, optionally filtered by client or study
    List {
        /// Only list systems of this client
        #[arg(long, conflicts_with = "study")]
        client: Option<String>,

        /// Only list systems attached to this study
        #[arg(long)]
        study: Option<String>,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Get IRT system details
    Get {
        /// IRT system ID
        id: String,

        #[arg(long)]
        json: bool,
    },
    /// Create a new IRT system
    Create {
        /// Owning client ID
        #[arg(long)]
        client: String,

        /// Study the system serves
        #[arg(long)]
        study: String,

        #[arg(short, long)]
        name: String,

        /// Vendor operating the system
        #[arg(long)]
        vendor: Option<String>,
    },
    /// Update an existing IRT system
    Update {
        /// IRT system ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(long)]
        vendor: Option<String>,

        #[arg(long)]
        study: Option<String>,

        #[arg(long)]
        client: Option<String>,
    },
    /// Delete an IRT system
    Delete {
        /// IRT system ID
        id: String,
    },
}

/// Handle IRT commands
pub async fn handle_irt_command(command: IrtCommands, repo: &IrtRepository) -> Result<()> {
    match command {
        IrtCommands::List {
            client,
            study,
            json,
        } => {
            let irts = match (&client, &study) {
                (Some(client_id), _) => repo.get_by_client(client_id).await?,
                (None, Some(study_id)) => repo.get_by_study(study_id).await?,
                (None, None) => repo.get_all().await?,
            };
            if json {
                return print_json(&irts);
            }
            if irts.is_empty() {
                print_empty("IRT systems");
            } else {
                println!("{}", format!("Found {} IRT system(s):", irts.len()).bold());
                println!();
                irts.iter().for_each(print_irt);
            }
            Ok(())
        }
        IrtCommands::Get { id, json } => {
            let irt = repo.get_by_id(&id).await?;
            if json {
                return print_json(&irt);
            }
            print_irt(&irt);
            Ok(())
        }
        IrtCommands::Create {
            client,
            study,
            name,
            vendor,
        } => {
            let dto = CreateIrtDto {
                vendor,
                ..CreateIrtDto::for_study(client, study, name)
            };
            let irt = repo.create(&dto).await?;
            print_success("IRT system created successfully!");
            println!("  ID:    {}", irt.id.cyan());
            println!("  Name:  {}", irt.name.bold());
            println!("  Study: {}", irt.study_id.dimmed());
            Ok(())
        }
        IrtCommands::Update {
            id,
            name,
            vendor,
            study,
            client,
        } => {
            let patch = UpdateIrtDto {
                name,
                vendor,
                study_id: study,
                client_id: client,
            };
            if patch.is_empty() {
                bail!("Nothing to update: pass at least one field to change");
            }
            repo.update(&id, &patch).await?;
            print_success(&format!("IRT system {id} updated"));
            Ok(())
        }
        IrtCommands::Delete { id } => {
            repo.remove(&id).await?;
            print_success(&format!("IRT system {id} deleted"));
            Ok(())
        }
    }
}

fn print_irt(irt: &IrtResponseDto) {
    println!("  {} IRT {}", "▸".cyan(), irt.name.bold());
    print_field("ID", Some(irt.id.as_str()));
    print_field("Study", Some(irt.study_id.as_str()));
    print_field("Client", Some(irt.client_id.as_str()));
    print_field("Vendor", irt.vendor.as_deref());
    print_timestamp("Created", irt.created_at.as_ref());
    print_timestamp("Updated", irt.updated_at.as_ref());
    println!();
}
