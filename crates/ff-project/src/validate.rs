//! Run configuration validation.

use crate::ProjectError;
use crate::convert::{to_freeze_config, to_sweep_definition};
use crate::schema::RunConfigDef;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check the file-level fields, then let the solver validate the run itself.
pub fn validate_config(config: &RunConfigDef) -> Result<(), ProjectError> {
    if config.version == 0 || config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        }
        .into());
    }

    if config.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", config.name),
            reason: "must not be empty".to_string(),
        }
        .into());
    }

    to_freeze_config(config).validate()?;

    if let Some(sweep) = &config.sweep {
        to_sweep_definition(sweep)?;
    }

    Ok(())
}
