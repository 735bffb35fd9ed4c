use super::{
    nullable_text, optional_code, optional_text, required_code, required_text, FieldErrors, Length, ValidationError,
};
use crate::api::requests::{CreateAirlineRequest, UpdateAirlineRequest};
use crate::database::models::{AirlineChanges, NewAirline};

pub const AIRLINE_ID: Length = Length::between(2, 3);
pub const IATA_CODE: Length = Length::exactly(2);
pub const NAME: Length = Length::between(2, 100);
pub const COUNTRY: Length = Length::between(1, 50);

pub fn validate_create(request: CreateAirlineRequest) -> Result<NewAirline, ValidationError> {
    let mut errors = FieldErrors::default();

    let airline_id = required_code(&mut errors, "airline_id", request.airline_id, AIRLINE_ID);
    let iata_code = required_code(&mut errors, "iata_code", request.iata_code, IATA_CODE);
    let name = required_text(&mut errors, "name", request.name, NAME);
    let country = optional_text(&mut errors, "country", request.country, COUNTRY);

    match (airline_id, iata_code, name) {
        (Some(airline_id), Some(iata_code), Some(name)) if errors.is_empty() => Ok(NewAirline {
            airline_id,
            iata_code,
            name,
            country,
        }),
        _ => Err(errors.into_error()),
    }
}

pub fn validate_update(request: UpdateAirlineRequest) -> Result<AirlineChanges, ValidationError> {
    let mut errors = FieldErrors::default();

    let changes = AirlineChanges {
        iata_code: optional_code(&mut errors, "iata_code", request.iata_code, IATA_CODE),
        name: optional_text(&mut errors, "name", request.name, NAME),
        country: nullable_text(&mut errors, "country", request.country, COUNTRY),
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(airline_id: &str, iata_code: &str, name: &str) -> CreateAirlineRequest {
        CreateAirlineRequest {
            airline_id: Some(airline_id.to_string()),
            iata_code: Some(iata_code.to_string()),
            name: Some(name.to_string()),
            country: None,
        }
    }

    #[test]
    fn valid_airline_is_normalised() {
        let airline = validate_create(request("aal", "aa", "American Airlines")).unwrap();
        assert_eq!(airline.airline_id, "AAL");
        assert_eq!(airline.iata_code, "AA");
        assert_eq!(airline.country, None);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = validate_create(CreateAirlineRequest::default()).unwrap_err();
        assert_eq!(err.message, "Missing required fields");
        assert_eq!(err.field_errors.len(), 3);
        assert!(err.field_errors.contains_key("airline_id"));
        assert!(err.field_errors.contains_key("iata_code"));
        assert!(err.field_errors.contains_key("name"));
    }

    #[test]
    fn length_rules_are_enforced() {
        let err = validate_create(request("A", "AAL", "X")).unwrap_err();
        assert_eq!(err.field_errors["airline_id"], "Must be between 2 and 3 characters");
        assert_eq!(err.field_errors["iata_code"], "Must be exactly 2 characters");
        assert_eq!(err.field_errors["name"], "Must be between 2 and 100 characters");

        let long_name = "N".repeat(101);
        assert!(validate_create(request("AA", "AA", &long_name)).is_err());
    }

    #[test]
    fn update_only_carries_supplied_fields() {
        let changes = validate_update(UpdateAirlineRequest {
            name: Some("American".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.name.as_deref(), Some("American"));
        assert_eq!(changes.iata_code, None);
        assert_eq!(changes.country, None);
    }

    #[test]
    fn update_rejects_bad_iata_code() {
        let err = validate_update(UpdateAirlineRequest {
            iata_code: Some("AAA".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.field_errors.contains_key("iata_code"));
    }

    #[test]
    fn null_country_clears_it() {
        let changes = validate_update(UpdateAirlineRequest {
            country: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.country, Some(None));
    }
}
