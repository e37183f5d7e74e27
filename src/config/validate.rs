//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::record::FilterSet;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    if let Some(filter) = &config.defaults.filter {
        FilterSet::parse(Some(filter)).map_err(|e| Error::ConfigValidation {
            message: format!("defaults.filter: {e}"),
        })?;
    }

    Ok(())
}
