//! Error types for scene configuration.

use std::fmt;

/// Errors raised while loading or validating a [`SceneConfig`](super::config::SceneConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The tuning file is not valid JSON or does not match the schema.
    Parse(serde_json::Error),
    /// A value is out of the range the simulation can run with.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse scene config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid scene config: `{}` {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_message_names_field() {
        let err = ConfigError::invalid("explosion.step", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid scene config: `explosion.step` must be positive"
        );
    }

    #[test]
    fn parse_error_has_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
