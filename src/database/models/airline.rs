use sqlx::FromRow;

/// Row of the `airlines` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Airline {
    pub airline_id: String,
    pub iata_code: String,
    pub name: String,
    pub country: Option<String>,
}

/// Validated input for inserting an airline
#[derive(Debug, Clone, PartialEq)]
pub struct NewAirline {
    pub airline_id: String,
    pub iata_code: String,
    pub name: String,
    pub country: Option<String>,
}

/// Validated partial update; `None` keeps the stored value and
/// `country: Some(None)` clears it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirlineChanges {
    pub iata_code: Option<String>,
    pub name: Option<String>,
    pub country: Option<Option<String>>,
}

impl AirlineChanges {
    pub fn apply(self, airline: &mut Airline) {
        if let Some(iata_code) = self.iata_code {
            airline.iata_code = iata_code;
        }
        if let Some(name) = self.name {
            airline.name = name;
        }
        if let Some(country) = self.country {
            airline.country = country;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airline() -> Airline {
        Airline {
            airline_id: "AAL".to_string(),
            iata_code: "AA".to_string(),
            name: "American Airlines".to_string(),
            country: Some("USA".to_string()),
        }
    }

    #[test]
    fn absent_country_is_kept_and_null_clears_it() {
        let mut kept = airline();
        AirlineChanges {
            name: Some("American".to_string()),
            ..Default::default()
        }
        .apply(&mut kept);
        assert_eq!(kept.country.as_deref(), Some("USA"));
        assert_eq!(kept.name, "American");

        let mut cleared = airline();
        AirlineChanges {
            country: Some(None),
            ..Default::default()
        }
        .apply(&mut cleared);
        assert_eq!(cleared.country, None);
    }
}
