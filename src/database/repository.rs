//! SQL for the three tables. Every function takes an explicit executor so the
//! same query runs against the pool (reads) or an open transaction (writes).

use sqlx::{postgres::PgExecutor, Postgres, QueryBuilder};

use crate::database::manager::DatabaseError;
use crate::database::models::{Airline, Airport, Flight, FlightFilter, NewAirline, NewAirport, NewFlight};

const AIRLINE_COLUMNS: &str = "airline_id, iata_code, name, country";
const AIRPORT_COLUMNS: &str = "airport_id, icao_code, name, city, country, latitude, longitude";
const FLIGHT_COLUMNS: &str = "flight_id, airline_id, flight_number, departure_airport, arrival_airport, \
     scheduled_departure, scheduled_arrival, actual_departure, actual_arrival, status, created_at, updated_at";

pub struct AirlineRepository;

impl AirlineRepository {
    pub async fn find<'e>(executor: impl PgExecutor<'e>, airline_id: &str) -> Result<Option<Airline>, DatabaseError> {
        let sql = format!("SELECT {AIRLINE_COLUMNS} FROM airlines WHERE airline_id = $1");
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(airline_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn exists<'e>(executor: impl PgExecutor<'e>, airline_id: &str) -> Result<bool, DatabaseError> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM airlines WHERE airline_id = $1)")
            .bind(airline_id)
            .fetch_one(executor)
            .await?;
        Ok(exists)
    }

    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Airline>, DatabaseError> {
        let sql = format!("SELECT {AIRLINE_COLUMNS} FROM airlines ORDER BY airline_id");
        Ok(sqlx::query_as::<_, Airline>(&sql).fetch_all(executor).await?)
    }

    pub async fn insert<'e>(executor: impl PgExecutor<'e>, airline: &NewAirline) -> Result<Airline, DatabaseError> {
        let sql = format!(
            "INSERT INTO airlines (airline_id, iata_code, name, country) VALUES ($1, $2, $3, $4) RETURNING {AIRLINE_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(&airline.airline_id)
            .bind(&airline.iata_code)
            .bind(&airline.name)
            .bind(&airline.country)
            .fetch_one(executor)
            .await?)
    }

    pub async fn update<'e>(executor: impl PgExecutor<'e>, airline: &Airline) -> Result<Airline, DatabaseError> {
        let sql = format!(
            "UPDATE airlines SET iata_code = $2, name = $3, country = $4 WHERE airline_id = $1 RETURNING {AIRLINE_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Airline>(&sql)
            .bind(&airline.airline_id)
            .bind(&airline.iata_code)
            .bind(&airline.name)
            .bind(&airline.country)
            .fetch_one(executor)
            .await?)
    }

    pub async fn delete<'e>(executor: impl PgExecutor<'e>, airline_id: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM airlines WHERE airline_id = $1")
            .bind(airline_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Number of flights operated by this airline
    pub async fn count_flights<'e>(executor: impl PgExecutor<'e>, airline_id: &str) -> Result<i64, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flights WHERE airline_id = $1")
            .bind(airline_id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }
}

pub struct AirportRepository;

impl AirportRepository {
    pub async fn find<'e>(executor: impl PgExecutor<'e>, airport_id: &str) -> Result<Option<Airport>, DatabaseError> {
        let sql = format!("SELECT {AIRPORT_COLUMNS} FROM airports WHERE airport_id = $1");
        Ok(sqlx::query_as::<_, Airport>(&sql)
            .bind(airport_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn exists<'e>(executor: impl PgExecutor<'e>, airport_id: &str) -> Result<bool, DatabaseError> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM airports WHERE airport_id = $1)")
            .bind(airport_id)
            .fetch_one(executor)
            .await?;
        Ok(exists)
    }

    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Airport>, DatabaseError> {
        let sql = format!("SELECT {AIRPORT_COLUMNS} FROM airports ORDER BY airport_id");
        Ok(sqlx::query_as::<_, Airport>(&sql).fetch_all(executor).await?)
    }

    pub async fn insert<'e>(executor: impl PgExecutor<'e>, airport: &NewAirport) -> Result<Airport, DatabaseError> {
        let sql = format!(
            "INSERT INTO airports (airport_id, icao_code, name, city, country, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {AIRPORT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Airport>(&sql)
            .bind(&airport.airport_id)
            .bind(&airport.icao_code)
            .bind(&airport.name)
            .bind(&airport.city)
            .bind(&airport.country)
            .bind(&airport.latitude)
            .bind(&airport.longitude)
            .fetch_one(executor)
            .await?)
    }

    pub async fn update<'e>(executor: impl PgExecutor<'e>, airport: &Airport) -> Result<Airport, DatabaseError> {
        let sql = format!(
            "UPDATE airports SET icao_code = $2, name = $3, city = $4, country = $5, latitude = $6, longitude = $7 \
             WHERE airport_id = $1 RETURNING {AIRPORT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Airport>(&sql)
            .bind(&airport.airport_id)
            .bind(&airport.icao_code)
            .bind(&airport.name)
            .bind(&airport.city)
            .bind(&airport.country)
            .bind(&airport.latitude)
            .bind(&airport.longitude)
            .fetch_one(executor)
            .await?)
    }

    pub async fn delete<'e>(executor: impl PgExecutor<'e>, airport_id: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM airports WHERE airport_id = $1")
            .bind(airport_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    /// Number of flights departing from or arriving at this airport
    pub async fn count_flights<'e>(executor: impl PgExecutor<'e>, airport_id: &str) -> Result<i64, DatabaseError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM flights WHERE departure_airport = $1 OR arrival_airport = $1")
                .bind(airport_id)
                .fetch_one(executor)
                .await?;
        Ok(count)
    }
}

pub struct FlightRepository;

impl FlightRepository {
    pub async fn find<'e>(executor: impl PgExecutor<'e>, flight_id: i32) -> Result<Option<Flight>, DatabaseError> {
        let sql = format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE flight_id = $1");
        Ok(sqlx::query_as::<_, Flight>(&sql)
            .bind(flight_id)
            .fetch_optional(executor)
            .await?)
    }

    /// Flights matching every supplied filter, latest scheduled departure first
    pub async fn list<'e>(executor: impl PgExecutor<'e>, filter: &FlightFilter) -> Result<Vec<Flight>, DatabaseError> {
        let mut query = Self::list_query(filter);
        Ok(query.build_query_as::<Flight>().fetch_all(executor).await?)
    }

    fn list_query(filter: &FlightFilter) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {FLIGHT_COLUMNS} FROM flights"));
        let mut keyword = " WHERE ";
        if let Some(status) = filter.status {
            query.push(keyword).push("status = ").push_bind(status.as_str());
            keyword = " AND ";
        }
        if let Some(airline_id) = &filter.airline_id {
            query.push(keyword).push("airline_id = ").push_bind(airline_id.clone());
        }
        query.push(" ORDER BY scheduled_departure DESC, flight_id DESC");
        query
    }

    pub async fn insert<'e>(executor: impl PgExecutor<'e>, flight: &NewFlight) -> Result<Flight, DatabaseError> {
        let sql = format!(
            "INSERT INTO flights (airline_id, flight_number, departure_airport, arrival_airport, \
             scheduled_departure, scheduled_arrival, actual_departure, actual_arrival, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {FLIGHT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Flight>(&sql)
            .bind(&flight.airline_id)
            .bind(&flight.flight_number)
            .bind(&flight.departure_airport)
            .bind(&flight.arrival_airport)
            .bind(flight.scheduled_departure)
            .bind(flight.scheduled_arrival)
            .bind(flight.actual_departure)
            .bind(flight.actual_arrival)
            .bind(flight.status.as_str())
            .fetch_one(executor)
            .await?)
    }

    /// Writes every column of `flight` and refreshes `updated_at`
    pub async fn update<'e>(executor: impl PgExecutor<'e>, flight: &Flight) -> Result<Flight, DatabaseError> {
        let sql = format!(
            "UPDATE flights SET airline_id = $2, flight_number = $3, departure_airport = $4, arrival_airport = $5, \
             scheduled_departure = $6, scheduled_arrival = $7, actual_departure = $8, actual_arrival = $9, \
             status = $10, updated_at = now() WHERE flight_id = $1 RETURNING {FLIGHT_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Flight>(&sql)
            .bind(flight.flight_id)
            .bind(&flight.airline_id)
            .bind(&flight.flight_number)
            .bind(&flight.departure_airport)
            .bind(&flight.arrival_airport)
            .bind(flight.scheduled_departure)
            .bind(flight.scheduled_arrival)
            .bind(flight.actual_departure)
            .bind(flight.actual_arrival)
            .bind(flight.status.as_str())
            .fetch_one(executor)
            .await?)
    }

    pub async fn delete<'e>(executor: impl PgExecutor<'e>, flight_id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM flights WHERE flight_id = $1")
            .bind(flight_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FlightStatus;

    #[test]
    fn unfiltered_list_has_no_where_clause() {
        let query = FlightRepository::list_query(&FlightFilter::default());
        assert_eq!(
            query.sql(),
            format!("SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY scheduled_departure DESC, flight_id DESC")
        );
    }

    #[test]
    fn both_filters_are_joined_with_and() {
        let filter = FlightFilter {
            status: Some(FlightStatus::Delayed),
            airline_id: Some("AA".to_string()),
        };
        let query = FlightRepository::list_query(&filter);
        assert!(query
            .sql()
            .ends_with(" WHERE status = $1 AND airline_id = $2 ORDER BY scheduled_departure DESC, flight_id DESC"));
    }

    #[test]
    fn airline_filter_alone_starts_the_where_clause() {
        let filter = FlightFilter {
            status: None,
            airline_id: Some("AA".to_string()),
        };
        let query = FlightRepository::list_query(&filter);
        assert!(query.sql().contains(" WHERE airline_id = $1 ORDER BY"));
    }
}
