//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, parseable bind address)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic configuration error.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Bind address is not a parseable socket address.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    /// Request timeout of zero would reject every request.
    #[error("request timeout must be greater than 0 seconds")]
    ZeroRequestTimeout,

    /// Body limit of zero would reject every body-carrying request.
    #[error("max body size must be greater than 0 bytes")]
    ZeroBodyLimit,
}

/// Check a parsed config for semantic errors. Collects every violation.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
