pub mod airline;
pub mod airport;
pub mod flight;

pub use airline::{Airline, AirlineChanges, NewAirline};
pub use airport::{Airport, AirportChanges, NewAirport};
pub use flight::{Flight, FlightChanges, FlightFilter, NewFlight};
