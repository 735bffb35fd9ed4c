use clap::Subcommand;
use serde_json::Value;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_collection, output_success, read_json_input};
use crate::cli::OutputFormat;

/// Shared subcommands for airlines and airports
#[derive(Subcommand)]
pub enum ResourceCommands {
    #[command(about = "List all records")]
    List,

    #[command(about = "Show one record")]
    Get {
        #[arg(help = "Record ID")]
        id: String,
    },

    #[command(about = "Create a record from --data or stdin")]
    Create {
        #[arg(long, help = "JSON document (reads stdin when omitted)")]
        data: Option<String>,
    },

    #[command(about = "Update supplied fields from --data or stdin")]
    Update {
        #[arg(help = "Record ID to update")]
        id: String,
        #[arg(long, help = "JSON document (reads stdin when omitted)")]
        data: Option<String>,
    },

    #[command(about = "Delete a record")]
    Delete {
        #[arg(help = "Record ID to delete")]
        id: String,
    },
}

pub async fn handle(
    resource: &str,
    cmd: ResourceCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        ResourceCommands::List => {
            let items = client.get(resource, &[]).await?;
            output_collection(output_format, resource, items)
        }
        ResourceCommands::Get { id } => {
            let record = client.get(&format!("{}/{}", resource, id), &[]).await?;
            output_success(output_format, &format!("{} {}", resource, id), Some(record))
        }
        ResourceCommands::Create { data } => {
            let body = read_json_input(data)?;
            let record = client.post(resource, &body).await?;
            output_success(output_format, &format!("Created in {}", resource), Some(record))
        }
        ResourceCommands::Update { id, data } => {
            let body = read_json_input(data)?;
            let record = client.patch(&format!("{}/{}", resource, id), &body).await?;
            output_success(output_format, &format!("Updated {} {}", resource, id), Some(record))
        }
        ResourceCommands::Delete { id } => {
            let result = client.delete(&format!("{}/{}", resource, id)).await?;
            let message = result
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Deleted {} {}", resource, id));
            output_success(output_format, &message, None)
        }
    }
}
