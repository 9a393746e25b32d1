//! Configuration validation

use chrono::format::{Item, StrftimeItems};
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_paths(config)?;
    validate_document(config)?;
    validate_filter(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_paths(config: &Config) -> Result<()> {
    if config.input.as_os_str().is_empty() {
        return Err(invalid("input", "input path cannot be empty").into());
    }

    if config.output.as_os_str().is_empty() {
        return Err(invalid("output", "output path cannot be empty").into());
    }

    Ok(())
}

fn validate_document(config: &Config) -> Result<()> {
    let document = &config.document;

    if document.title.trim().is_empty() {
        return Err(invalid("document.title", "title cannot be empty").into());
    }

    if !document.feedback_email.contains('@') {
        return Err(invalid(
            "document.feedback_email",
            format!("'{}' is not an email address", document.feedback_email),
        )
        .into());
    }

    if document.unreleased_heading.trim().is_empty() {
        return Err(invalid("document.unreleased_heading", "heading cannot be empty").into());
    }

    if StrftimeItems::new(&document.date_format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid(
            "document.date_format",
            format!("'{}' is not a valid date format", document.date_format),
        )
        .into());
    }

    Ok(())
}

fn validate_filter(config: &Config) -> Result<()> {
    if config.filter.min_message_length == 0 {
        return Err(invalid("filter.min_message_length", "must be at least 1").into());
    }

    if let Some(empty) = config
        .filter
        .extra_bot_markers
        .iter()
        .chain(&config.filter.extra_noise_keywords)
        .find(|k| k.trim().is_empty())
    {
        return Err(invalid(
            "filter",
            format!("blank marker or keyword ({:?}) would match every commit", empty),
        )
        .into());
    }

    Ok(())
}
