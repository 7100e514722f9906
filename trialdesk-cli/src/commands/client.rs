//! Client command handlers

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use trialdesk_client::ClientRepository;
use trialdesk_core::dto::client::{ClientResponseDto, CreateClientDto, UpdateClientDto};

use crate::output::{print_empty, print_field, print_json, print_success, print_timestamp};

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// List all clients
    List {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Get client details
    Get {
        /// Client ID
        id: String,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new client
    Create {
        /// Client name
        #[arg(short, long)]
        name: String,

        /// Short internal code
        #[arg(short, long)]
        code: Option<String>,

        /// Primary contact email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Update an existing client
    Update {
        /// Client ID
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        code: Option<String>,

        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a client
    Delete {
        /// Client ID
        id: String,
    },
}

/// Handle client commands
pub async fn handle_client_command(command: ClientCommands, repo: &ClientRepository) -> Result<()> {
    match command {
        ClientCommands::List { json } => {
            let clients = repo.get_all().await?;
            if json {
                return print_json(&clients);
            }
            if clients.is_empty() {
                print_empty("clients");
            } else {
                println!("{}", format!("Found {} client(s):", clients.len()).bold());
                println!();
                clients.iter().for_each(print_client);
            }
            Ok(())
        }
        ClientCommands::Get { id, json } => {
            let client = repo.get_by_id(&id).await?;
            if json {
                return print_json(&client);
            }
            print_client(&client);
            Ok(())
        }
        ClientCommands::Create { name, code, email } => {
            let dto = CreateClientDto {
                name,
                code,
                contact_email: email,
            };
            let client = repo.create(&dto).await?;
            print_success("Client created successfully!");
            println!("  ID:   {}", client.id.cyan());
            println!("  Name: {}", client.name.bold());
            Ok(())
        }
        ClientCommands::Update {
            id,
            name,
            code,
            email,
        } => {
            let patch = UpdateClientDto {
                name,
                code,
                contact_email: email,
            };
            if patch.is_empty() {
                bail!("Nothing to update: pass at least one of --name, --code, --email");
            }
            repo.update(&id, &patch).await?;
            print_success(&format!("Client {id} updated"));
            Ok(())
        }
        ClientCommands::Delete { id } => {
            repo.remove(&id).await?;
            print_success(&format!("Client {id} deleted"));
            Ok(())
        }
    }
}

/// Print a client summary
fn print_client(client: &ClientResponseDto) {
    println!("  {} Client {}", "▸".cyan(), client.name.bold());
    print_field("ID", Some(client.id.as_str()));
    print_field("Code", client.code.as_deref());
    print_field("Contact", client.contact_email.as_deref());
    print_timestamp("Created", client.created_at.as_ref());
    print_timestamp("Updated", client.updated_at.as_ref());
    println!();
}
