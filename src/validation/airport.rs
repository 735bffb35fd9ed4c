use super::{
    optional_code, optional_coordinate, optional_text, required_code, required_coordinate, required_text, FieldErrors,
    Length, ValidationError,
};
use crate::api::requests::{CreateAirportRequest, UpdateAirportRequest};
use crate::database::models::{AirportChanges, NewAirport};

pub const AIRPORT_ID: Length = Length::exactly(3);
pub const ICAO_CODE: Length = Length::exactly(4);
pub const NAME: Length = Length::between(2, 100);
pub const CITY: Length = Length::between(1, 50);
pub const COUNTRY: Length = Length::between(1, 50);
pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub fn validate_create(request: CreateAirportRequest) -> Result<NewAirport, ValidationError> {
    let mut errors = FieldErrors::default();

    let airport_id = required_code(&mut errors, "airport_id", request.airport_id, AIRPORT_ID);
    let icao_code = required_code(&mut errors, "icao_code", request.icao_code, ICAO_CODE);
    let name = required_text(&mut errors, "name", request.name, NAME);
    let city = required_text(&mut errors, "city", request.city, CITY);
    let country = required_text(&mut errors, "country", request.country, COUNTRY);
    let latitude = required_coordinate(&mut errors, "latitude", request.latitude, MAX_LATITUDE);
    let longitude = required_coordinate(&mut errors, "longitude", request.longitude, MAX_LONGITUDE);

    match (airport_id, icao_code, name, city, country, latitude, longitude) {
        (Some(airport_id), Some(icao_code), Some(name), Some(city), Some(country), Some(latitude), Some(longitude))
            if errors.is_empty() =>
        {
            Ok(NewAirport {
                airport_id,
                icao_code,
                name,
                city,
                country,
                latitude,
                longitude,
            })
        }
        _ => Err(errors.into_error()),
    }
}

pub fn validate_update(request: UpdateAirportRequest) -> Result<AirportChanges, ValidationError> {
    let mut errors = FieldErrors::default();

    let changes = AirportChanges {
        icao_code: optional_code(&mut errors, "icao_code", request.icao_code, ICAO_CODE),
        name: optional_text(&mut errors, "name", request.name, NAME),
        city: optional_text(&mut errors, "city", request.city, CITY),
        country: optional_text(&mut errors, "country", request.country, COUNTRY),
        latitude: optional_coordinate(&mut errors, "latitude", request.latitude, MAX_LATITUDE),
        longitude: optional_coordinate(&mut errors, "longitude", request.longitude, MAX_LONGITUDE),
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors.into_error())
    }
}
