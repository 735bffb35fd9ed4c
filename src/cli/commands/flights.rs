use clap::Subcommand;

use super::resource::{self, ResourceCommands};
use crate::cli::client::ApiClient;
use crate::cli::utils::output_collection;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum FlightCommands {
    #[command(about = "List flights, latest departure first")]
    List {
        #[arg(long, help = "Scheduled, On Time, Delayed, Cancelled or Completed")]
        status: Option<String>,
        #[arg(long, help = "Airline code")]
        airline: Option<String>,
    },

    #[command(about = "Show one flight")]
    Get {
        #[arg(help = "Flight ID")]
        id: String,
    },

    #[command(about = "Create a flight from --data or stdin")]
    Create {
        #[arg(long, help = "JSON document (reads stdin when omitted)")]
        data: Option<String>,
    },

    #[command(about = "Update supplied fields from --data or stdin")]
    Update {
        #[arg(help = "Flight ID to update")]
        id: String,
        #[arg(long, help = "JSON document (reads stdin when omitted)")]
        data: Option<String>,
    },

    #[command(about = "Delete a flight")]
    Delete {
        #[arg(help = "Flight ID to delete")]
        id: String,
    },
}

pub async fn handle(cmd: FlightCommands, client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let record_cmd = match cmd {
        FlightCommands::List { status, airline } => {
            let mut query = Vec::new();
            if let Some(status) = status {
                query.push(("status", status));
            }
            if let Some(airline) = airline {
                query.push(("airline_id", airline));
            }
            let flights = client.get("flights", &query).await?;
            return output_collection(output_format, "flights", flights);
        }
        FlightCommands::Get { id } => ResourceCommands::Get { id },
        FlightCommands::Create { data } => ResourceCommands::Create { data },
        FlightCommands::Update { id, data } => ResourceCommands::Update { id, data },
        FlightCommands::Delete { id } => ResourceCommands::Delete { id },
    };
    resource::handle("flights", record_cmd, client, output_format).await
}
