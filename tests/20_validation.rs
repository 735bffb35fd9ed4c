mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::json;

use common::{json, TestServer};

// Validation runs before any database access, so none of these tests need
// PostgreSQL.

#[tokio::test]
async fn empty_airline_reports_every_missing_field() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server.admin(Method::POST, "/airlines").json(&json!({})).send().await?;
    let (status, body) = json(res).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(body["code"], "VALIDATION_ERROR");
    for field in ["airline_id", "iata_code", "name"] {
        assert_eq!(body["field_errors"][field], "This field is required", "{}", field);
    }
    Ok(())
}

#[tokio::test]
async fn airline_length_rules() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server
        .admin(Method::POST, "/airlines")
        .json(&json!({ "airline_id": "A", "iata_code": "AAA", "name": "X" }))
        .send()
        .await?;
    let (status, body) = json(res).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field_errors"]["iata_code"], "Must be exactly 2 characters");
    assert_eq!(body["field_errors"]["airline_id"], "Must be between 2 and 3 characters");
    assert_eq!(body["field_errors"]["name"], "Must be between 2 and 100 characters");
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_rejected() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server
        .admin(Method::POST, "/airlines")
        .header("content-type", "application/json")
        .body("{\"airline_id\": ")
        .send()
        .await?;
    let (status, body) = json(res).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn non_numeric_coordinates_are_rejected() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server
        .admin(Method::POST, "/airports")
        .json(&json!({
            "airport_id": "JFK",
            "icao_code": "KJFK",
            "name": "John F. Kennedy International",
            "city": "New York",
            "country": "USA",
            "latitude": "north",
            "longitude": 200
        }))
        .send()
        .await?;
    let (status, body) = json(res).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["latitude"].is_string());
    assert_eq!(body["field_errors"]["longitude"], "Must be between -180 and 180");
    Ok(())
}

#[tokio::test]
async fn unparsable_flight_timestamp_is_a_validation_error() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server
        .admin(Method::POST, "/flights")
        .json(&json!({
            "airline_id": "AA",
            "flight_number": "100",
            "departure_airport": "JFK",
            "arrival_airport": "LAX",
            "scheduled_departure": "next tuesday",
            "scheduled_arrival": "2024-05-01T14:00:00Z"
        }))
        .send()
        .await?;
    let (status, body) = json(res).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["scheduled_departure"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Invalid ISO-8601 timestamp"));
    Ok(())
}

#[tokio::test]
async fn unknown_status_is_rejected_on_write_and_filter() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server
        .admin(Method::PATCH, "/flights/1")
        .json(&json!({ "status": "Boarding" }))
        .send()
        .await?;
    let (status, body) = json(res).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["status"]
        .as_str()
        .unwrap_or_default()
        .contains("Scheduled, On Time, Delayed, Cancelled, Completed"));

    let res = server.get("/flights?status=Lost").send().await?;
    let (status, body) = json(res).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["status"].is_string());
    Ok(())
}

#[tokio::test]
async fn flight_ids_must_be_integers() -> Result<()> {
    let server = TestServer::spawn_default().await?;

    let res = server.admin(Method::DELETE, "/flights/abc").send().await?;
    let (status, body) = json(res).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"]["flight_id"].is_string());
    Ok(())
}
