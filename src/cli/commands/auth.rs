use anyhow::anyhow;
use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

pub async fn health(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let (status, body) = client.get_raw("health").await?;
    let data = body.get("data").cloned().unwrap_or(Value::Null);
    if status == 200 {
        output_success(output_format, "Server is healthy", Some(data))
    } else {
        Err(anyhow!("Server is degraded ({}): {}", status, data))
    }
}

/// Prints the token so it can be exported as FLIGHTCTL_TOKEN
pub async fn login(client: &ApiClient, username: &str, password: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let data = client
        .post("login", &json!({ "username": username, "password": password }))
        .await?;

    match output_format {
        OutputFormat::Json => output_success(output_format, "Logged in", Some(data)),
        OutputFormat::Text => {
            let token = data
                .get("access_token")
                .and_then(Value::as_str)
                .ok_or_else(|| anyhow!("login response did not contain a token"))?;
            println!("{}", token);
            Ok(())
        }
    }
}
