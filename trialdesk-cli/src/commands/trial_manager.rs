//! Trial manager command handlers

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use trialdesk_client::TrialManagerRepository;
use trialdesk_core::dto::trial_manager::{
    CreateTrialManagerDto, TrialManagerResponseDto, UpdateTrialManagerDto,
};

use crate::output::{print_empty, print_field, print_json, print_success, print_timestamp};

/// Trial manager subcommands
#[derive(Subcommand)]
pub enum TrialManagerCommands {
    /// List all trial managers
    List {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a trial manager by ID, or the one assigned to a client
    Get {
        /// Trial manager ID
        #[arg(required_unless_present = "client")]
        id: Option<String>,

        /// Look up the manager assigned to this client instead
        #[arg(long, conflicts_with = "id")]
        client: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Create a new trial manager
    Create {
        /// Client the manager is assigned to
        #[arg(long)]
        client: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: Option<String>,
    },
    /// Update an existing trial manager
    Update {
        /// Trial manager ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Reassign to another client
        #[arg(long)]
        client: Option<String>,
    },
    /// Delete a trial manager
    Delete {
        /// Trial manager ID
        id: String,
    },
}

/// Handle trial manager commands
pub async fn handle_trial_manager_command(
    command: TrialManagerCommands,
    repo: &TrialManagerRepository,
) -> Result<()> {
    match command {
        TrialManagerCommands::List { json } => {
            let managers = repo.get_all().await?;
            if json {
                return print_json(&managers);
            }
            if managers.is_empty() {
                print_empty("trial managers");
            } else {
                println!(
                    "{}",
                    format!("Found {} trial manager(s):", managers.len()).bold()
                );
                println!();
                managers.iter().for_each(print_trial_manager);
            }
            Ok(())
        }
        TrialManagerCommands::Get { id, client, json } => {
            let manager = match (id, client) {
                (_, Some(client_id)) => repo.get_by_client(&client_id).await?,
                (Some(id), None) => repo.get_by_id(&id).await?,
                (None, None) => bail!("Pass a trial manager ID or --client"),
            };
            if json {
                return print_json(&manager);
            }
            print_trial_manager(&manager);
            Ok(())
        }
        TrialManagerCommands::Create {
            client,
            name,
            email,
        } => {
            let dto = CreateTrialManagerDto {
                email,
                ..CreateTrialManagerDto::for_client(client, name)
            };
            let manager = repo.create(&dto).await?;
            print_success("Trial manager created successfully!");
            println!("  ID:     {}", manager.id.cyan());
            println!("  Name:   {}", manager.name.bold());
            println!("  Client: {}", manager.client_id.dimmed());
            Ok(())
        }
        TrialManagerCommands::Update {
            id,
            name,
            email,
            client,
        } => {
            let patch = UpdateTrialManagerDto {
                name,
                email,
                client_id: client,
            };
            if patch.is_empty() {
                bail!("Nothing to update: pass at least one field to change");
            }
            repo.update(&id, &patch).await?;
            print_success(&format!("Trial manager {id} updated"));
            Ok(())
        }
        TrialManagerCommands::Delete { id } => {
            repo.remove(&id).await?;
            print_success(&format!("Trial manager {id} deleted"));
            Ok(())
        }
    }
}

fn print_trial_manager(manager: &TrialManagerResponseDto) {
    println!("  {} Trial manager {}", "▸".cyan(), manager.name.bold());
    print_field("ID", Some(manager.id.as_str()));
    print_field("Client", Some(manager.client_id.as_str()));
    print_field("Email", manager.email.as_deref());
    print_timestamp("Created", manager.created_at.as_ref());
    print_timestamp("Updated", manager.updated_at.as_ref());
    println!();
}
