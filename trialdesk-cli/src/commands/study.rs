//! Study command handlers

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use trialdesk_client::StudyRepository;
use trialdesk_core::dto::study::{CreateStudyDto, StudyResponseDto, UpdateStudyDto};

use crate::output::{print_empty, print_field, print_json, print_success, print_timestamp};

/// Study subcommands
#[derive(Subcommand)]
pub enum StudyCommands {
    /// List studies, optionally only those of one client
    List {
        /// Only list studies owned by this client
        #[arg(long)]
        client: Option<String>,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Get study details
    Get {
        /// Study ID
        id: String,

        #[arg(long)]
        json: bool,
    },
    /// Create a new study
    Create {
        /// Owning client ID
        #[arg(long)]
        client: String,

        #[arg(short, long)]
        name: String,

        /// Sponsor protocol number
        #[arg(short, long)]
        protocol: Option<String>,

        /// Clinical phase (e.g. II, III)
        #[arg(long)]
        phase: Option<String>,
    },
    /// Update an existing study
    Update {
        /// Study ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        protocol: Option<String>,

        #[arg(long)]
        phase: Option<String>,

        /// Move the study to another client
        #[arg(long)]
        client: Option<String>,
    },
    /// Delete a study
    Delete {
        /// Study ID
        id: String,
    },
}

/// Handle study commands
pub async fn handle_study_command(command: StudyCommands, repo: &StudyRepository) -> Result<()> {
    match command {
        StudyCommands::List { client, json } => {
            let studies = match &client {
                Some(client_id) => repo.get_by_client(client_id).await?,
                None => repo.get_all().await?,
            };
            if json {
                return print_json(&studies);
            }
            if studies.is_empty() {
                print_empty("studies");
            } else {
                println!("{}", format!("Found {} study(ies):", studies.len()).bold());
                println!();
                studies.iter().for_each(print_study);
            }
            Ok(())
        }
        StudyCommands::Get { id, json } => {
            let study = repo.get_by_id(&id).await?;
            if json {
                return print_json(&study);
            }
            print_study(&study);
            Ok(())
        }
        StudyCommands::Create {
            client,
            name,
            protocol,
            phase,
        } => {
            let dto = CreateStudyDto {
                protocol_number: protocol,
                phase,
                ..CreateStudyDto::for_client(client, name)
            };
            let study = repo.create(&dto).await?;
            print_success("Study created successfully!");
            println!("  ID:     {}", study.id.cyan());
            println!("  Name:   {}", study.name.bold());
            println!("  Client: {}", study.client_id.dimmed());
            Ok(())
        }
        StudyCommands::Update {
            id,
            name,
            protocol,
            phase,
            client,
        } => {
            let patch = UpdateStudyDto {
                name,
                protocol_number: protocol,
                phase,
                client_id: client,
            };
            if patch.is_empty() {
                bail!("Nothing to update: pass at least one field to change");
            }
            repo.update(&id, &patch).await?;
            print_success(&format!("Study {id} updated"));
            Ok(())
        }
        StudyCommands::Delete { id } => {
            repo.remove(&id).await?;
            print_success(&format!("Study {id} deleted"));
            Ok(())
        }
    }
}

fn print_study(study: &StudyResponseDto) {
    println!("  {} Study {}", "▸".cyan(), study.name.bold());
    print_field("ID", Some(study.id.as_str()));
    print_field("Client", Some(study.client_id.as_str()));
    print_field("Protocol", study.protocol_number.as_deref());
    print_field("Phase", study.phase.as_deref());
    print_timestamp("Created", study.created_at.as_ref());
    print_timestamp("Updated", study.updated_at.as_ref());
    println!();
}
