use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Pattern errors
// =============================================================================

/// Failures a pattern operation can report to its driver.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("The age must be greater than 18 (got {age})")]
    InvalidAge { age: u32 },

    #[error("Unknown calculator operation '{name}'")]
    UnknownOperation { name: String },

    #[error("Property '{name}' does not exist")]
    UnknownField { name: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PatternError {
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_age_message() {
        let err = PatternError::InvalidAge { age: 17 };
        assert_eq!(err.to_string(), "The age must be greater than 18 (got 17)");
    }

    #[test]
    fn test_config_error_converts() {
        let err: PatternError = ConfigError::invalid("denominations", "must not be empty").into();
        assert!(matches!(err, PatternError::Config(ConfigError::Invalid { .. })));
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'denominations': must not be empty"
        );
    }
}
