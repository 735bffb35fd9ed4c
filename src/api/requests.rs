//! Request bodies and query strings as they arrive on the wire.
//!
//! Every field is optional here so that a missing field becomes a
//! field-level validation error instead of a JSON rejection.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateAirlineRequest {
    pub airline_id: Option<String>,
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Keeps an explicit `null` apart from an absent key: absent is `None`,
/// `null` is `Some(None)`. Used for nullable columns in partial updates.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateAirlineRequest {
    pub iata_code: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "present")]
    pub country: Option<Option<String>>,
}

/// Coordinates are accepted as JSON numbers or numeric strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateAirportRequest {
    pub airport_id: Option<String>,
    pub icao_code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateAirportRequest {
    pub icao_code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateFlightRequest {
    pub airline_id: Option<String>,
    pub flight_number: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub scheduled_departure: Option<String>,
    pub scheduled_arrival: Option<String>,
    pub actual_departure: Option<String>,
    pub actual_arrival: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateFlightRequest {
    pub airline_id: Option<String>,
    pub flight_number: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub scheduled_departure: Option<String>,
    pub scheduled_arrival: Option<String>,
    #[serde(deserialize_with = "present")]
    pub actual_departure: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    pub actual_arrival: Option<Option<String>>,
    pub status: Option<String>,
}

/// `GET /flights?status=&airline_id=`
#[derive(Debug, Default, Deserialize)]
pub struct FlightListQuery {
    pub status: Option<String>,
    pub airline_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}
