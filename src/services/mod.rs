//! One service per entity. Each mutating call validates its input, runs the
//! referential checks and the write inside one transaction, and commits only
//! when everything succeeded.

pub mod airline_service;
pub mod airport_service;
pub mod error;
pub mod flight_service;

pub use airline_service::AirlineService;
pub use airport_service::AirportService;
pub use error::ServiceError;
pub use flight_service::FlightService;
