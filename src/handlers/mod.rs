// handlers/mod.rs - one module per resource
//
// Reads are public. Writes on the three resources pass through
// `middleware::require_admin_for_writes` before reaching these handlers.

pub mod airlines;
pub mod airports;
pub mod flights;
pub mod login;
pub mod system;
