//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Bind address must be a socket address
//! - Log filter must be a valid `EnvFilter` directive
//! - Drain timeout must be positive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: SleepyConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::schema::SleepyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("observability.log_level {0:?} is not a valid filter")]
    LogLevel(String),

    #[error("shutdown.drain_timeout_secs must be greater than zero")]
    DrainTimeout,
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &SleepyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.shutdown.drain_timeout_secs == 0 {
        errors.push(ValidationError::DrainTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SleepyConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = SleepyConfig::default();
        config.listener.bind_address = "localhost".into();

        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::BindAddress("localhost".into())])
        );
    }

    #[test]
    fn test_bad_log_level() {
        let mut config = SleepyConfig::default();
        config.observability.log_level = "sleepy_server=loud".into();

        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::LogLevel("sleepy_server=loud".into())])
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = SleepyConfig::default();
        config.listener.bind_address = "nope".into();
        config.shutdown.drain_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::DrainTimeout));
    }
}
