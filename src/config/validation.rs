//! Configuration validation.
//!
//! Serde handles the syntax; this pass checks value ranges and endpoint URLs
//! and reports every problem found, not just the first.

use std::fmt;

use crate::config::schema::ForwarderConfig;

/// Lowest accepted gas price multiplier: the quote plus 10%.
pub const MIN_PRICE_MULTIPLIER_PERCENT: u64 = 110;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ForwarderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(url) = &config.rpc.url {
        if let Err(e) = url.parse::<url::Url>() {
            errors.push(ValidationError::new("rpc.url", format!("invalid URL '{}': {}", url, e)));
        }
    }
    for url in &config.rpc.failover_urls {
        if let Err(e) = url.parse::<url::Url>() {
            errors.push(ValidationError::new(
                "rpc.failover_urls",
                format!("invalid URL '{}': {}", url, e),
            ));
        }
    }
    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::new("rpc.timeout_secs", "must be greater than 0"));
    }
    if config.rpc.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "rpc.confirmation_timeout_secs",
            "must be greater than 0",
        ));
    }

    if config.gas.gas_limit < 21_000 {
        errors.push(ValidationError::new(
            "gas.gas_limit",
            "must cover a plain transfer (at least 21000)",
        ));
    }
    if config.gas.price_multiplier_percent < MIN_PRICE_MULTIPLIER_PERCENT {
        errors.push(ValidationError::new(
            "gas.price_multiplier_percent",
            format!("must be at least {}", MIN_PRICE_MULTIPLIER_PERCENT),
        ));
    }

    if config.timing.max_confirmation_attempts == Some(0) {
        errors.push(ValidationError::new(
            "timing.max_confirmation_attempts",
            "must be at least 1 when set",
        ));
    }

    if config.logging.file_prefix.is_empty()
        || config.logging.file_prefix.contains(std::path::is_separator)
    {
        errors.push(ValidationError::new(
            "logging.file_prefix",
            "must be a non-empty file name without path separators",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
