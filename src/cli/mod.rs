//! `flightctl`: a thin HTTP client for a running Flight Tracker API.

pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use client::ApiClient;

#[derive(Parser)]
#[command(name = "flightctl")]
#[command(about = "flightctl - command-line client for the Flight Tracker API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "FLIGHTCTL_SERVER", default_value = "http://localhost:5000", help = "API base URL")]
    pub server: String,

    #[arg(long, global = true, env = "FLIGHTCTL_TOKEN", hide_env_values = true, help = "Bearer token for write operations")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check server health status from the /health endpoint")]
    Health,

    #[command(about = "Obtain an admin token")]
    Login {
        #[arg(long, default_value = "admin")]
        username: String,
        #[arg(long, env = "FLIGHTCTL_PASSWORD", hide_env_values = true)]
        password: String,
    },

    #[command(about = "Airline operations")]
    Airlines {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Airport operations")]
    Airports {
        #[command(subcommand)]
        cmd: commands::resource::ResourceCommands,
    },

    #[command(about = "Flight operations")]
    Flights {
        #[command(subcommand)]
        cmd: commands::flights::FlightCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json && !cli.text {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = ApiClient::new(&cli.server, cli.token)?;

    match cli.command {
        Commands::Health => commands::auth::health(&client, output_format).await,
        Commands::Login { username, password } => {
            commands::auth::login(&client, &username, &password, output_format).await
        }
        Commands::Airlines { cmd } => commands::resource::handle("airlines", cmd, &client, output_format).await,
        Commands::Airports { cmd } => commands::resource::handle("airports", cmd, &client, output_format).await,
        Commands::Flights { cmd } => commands::flights::handle(cmd, &client, output_format).await,
    }
}
