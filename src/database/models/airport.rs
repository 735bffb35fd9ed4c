use sqlx::{types::BigDecimal, FromRow};

/// Row of the `airports` table. Coordinates are NUMERIC(10,6).
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Airport {
    pub airport_id: String,
    pub icao_code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: BigDecimal,
    pub longitude: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAirport {
    pub airport_id: String,
    pub icao_code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: BigDecimal,
    pub longitude: BigDecimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportChanges {
    pub icao_code: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<BigDecimal>,
    pub longitude: Option<BigDecimal>,
}

impl AirportChanges {
    pub fn apply(self, airport: &mut Airport) {
        if let Some(icao_code) = self.icao_code {
            airport.icao_code = icao_code;
        }
        if let Some(name) = self.name {
            airport.name = name;
        }
        if let Some(city) = self.city {
            airport.city = city;
        }
        if let Some(country) = self.country {
            airport.country = country;
        }
        if let Some(latitude) = self.latitude {
            airport.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            airport.longitude = longitude;
        }
    }
}
