pub mod config;
pub mod error;

pub use config::{CorsConfig, GatewayConfig};
pub use error::{ApiError, GatewayError};
