pub mod auth;
pub mod rate_limit;
pub mod response;
pub mod security;

pub use auth::{require_admin_for_writes, AuthUser};
pub use rate_limit::rate_limit_layers;
pub use response::{ApiResponse, ApiResult};
pub use security::{body_limit_layers, cors_layer, security_header_layers};
