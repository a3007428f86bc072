use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "Connector dashboard for appointment tickets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of the connector ticket dashboard
    #[command(visible_alias = "d")]
    Dashboard {
        /// Page to show (1-indexed)
        #[arg(short, long, default_value_t = 1, value_parser = parse_page)]
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a ticket with its connector and pro details
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the intake call date of a ticket
    IntakeDate {
        /// Ticket ID
        id: u64,

        /// Date and time, e.g. "2024-01-15 10:30" or 2024-01-15T10:30:00Z
        when: String,
    },

    /// Mark the intake call of a ticket as done
    IntakeDone {
        /// Ticket ID
        id: u64,
    },

    /// Assign a professional to a ticket
    AssignPro {
        /// Ticket ID
        id: u64,

        /// Professional ID
        pro_id: u64,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.url, api.token, request_timeout, display.timezone)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_assign_pro, cmd_config_get, cmd_config_set, cmd_config_show, cmd_dashboard,
            cmd_intake_date, cmd_intake_done, cmd_show,
        };

        match self {
            Commands::Dashboard { page, json } => cmd_dashboard(page, json).await,
            Commands::Show { id, json } => cmd_show(id, json).await,
            Commands::IntakeDate { id, when } => cmd_intake_date(id, &when).await,
            Commands::IntakeDone { id } => cmd_intake_done(id).await,
            Commands::AssignPro { id, pro_id } => cmd_assign_pro(id, pro_id).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_page(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) => Err("page numbers start at 1".to_string()),
        Ok(page) => Ok(page),
        Err(_) => Err(format!("invalid page '{s}'. Must be a positive integer")),
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "ticketdesk", &mut io::stdout());
}
