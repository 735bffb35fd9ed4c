use anyhow::Context;
use serde_json::{json, Value};
use std::io::Read;

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });
            if let Some(data_value) = data {
                response["data"] = data_value;
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let Some(data_value) = data {
                print_text(&data_value);
            }
        }
    }
    Ok(())
}

/// Output a collection, one row per line in text mode
pub fn output_collection(output_format: OutputFormat, name: &str, items: Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ name: items }))?);
        }
        OutputFormat::Text => match items.as_array() {
            Some(rows) if rows.is_empty() => println!("No {} found", name),
            Some(rows) => {
                for row in rows {
                    println!("{}", summary_line(row));
                }
            }
            None => print_text(&items),
        },
    }
    Ok(())
}

fn print_text(value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map {
                match field {
                    Value::String(s) => println!("  {}: {}", key, s),
                    Value::Null => println!("  {}: -", key),
                    other => println!("  {}: {}", key, other),
                }
            }
        }
        other => println!("{}", other),
    }
}

/// Compact one-line rendering of a row
pub fn summary_line(row: &Value) -> String {
    let Some(map) = row.as_object() else {
        return row.to_string();
    };
    map.values()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            Value::Null => "-".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// JSON document from `--data`, or from stdin when absent
pub fn read_json_input(data: Option<String>) -> anyhow::Result<Value> {
    let raw = match data {
        Some(raw) => raw,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read JSON from stdin")?;
            buffer
        }
    };
    let value: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("input must be a JSON object");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_joins_values() {
        let row = json!({"airline_id": "AA", "iata_code": "AA", "country": null});
        assert_eq!(summary_line(&row), "AA  AA  -");
    }

    #[test]
    fn inline_data_must_be_an_object() {
        assert!(read_json_input(Some("{\"name\": \"Delta\"}".to_string())).is_ok());
        assert!(read_json_input(Some("[1, 2]".to_string())).is_err());
        assert!(read_json_input(Some("not json".to_string())).is_err());
    }
}
