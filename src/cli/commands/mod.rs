pub mod auth;
pub mod flights;
pub mod resource;
