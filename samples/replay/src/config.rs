//! Replay configuration.
//!
//! Both written values of the sample scenarios come from the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `REPLAY_FIRST_WRITE` | `10` |
//! | `REPLAY_SECOND_WRITE` | `20` |
//!
//! An unset variable falls back to its default; a set but unparsable one is
//! an error.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable holding the first value written.
pub const FIRST_WRITE_KEY: &str = "REPLAY_FIRST_WRITE";

/// Environment variable holding the second value written.
pub const SECOND_WRITE_KEY: &str = "REPLAY_SECOND_WRITE";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Values written by the sample scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Written before the first read.
    pub first_write: i32,
    /// Written before the second read.
    pub second_write: i32,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            first_write: 10,
            second_write: 20,
        }
    }
}

impl ReplayConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but is not
    /// an `i32`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is present but is
    /// not an `i32`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            first_write: parse_or(&lookup, FIRST_WRITE_KEY, defaults.first_write)?,
            second_write: parse_or(&lookup, SECOND_WRITE_KEY, defaults.second_write)?,
        })
    }
}

fn parse_or(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: i32,
) -> Result<i32, ConfigError> {
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_in(
        variables: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let variables: HashMap<String, String> = variables
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| variables.get(key).cloned()
    }

    #[rstest]
    fn config_error_invalid_value_display() {
        let error = ConfigError::InvalidValue {
            key: "TEST_VAR".to_string(),
            message: "must be a number".to_string(),
        };
        assert_eq!(format!("{error}"), "Invalid value for TEST_VAR: must be a number");
    }

    #[rstest]
    fn missing_variables_use_defaults() {
        let config = ReplayConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, ReplayConfig::default());
        assert_eq!(config.first_write, 10);
        assert_eq!(config.second_write, 20);
    }

    #[rstest]
    #[case(&[("REPLAY_FIRST_WRITE", "3")], 3, 20)]
    #[case(&[("REPLAY_SECOND_WRITE", "-4")], 10, -4)]
    #[case(&[("REPLAY_FIRST_WRITE", " 7 "), ("REPLAY_SECOND_WRITE", "8")], 7, 8)]
    fn present_variables_override_defaults(
        #[case] variables: &[(&str, &str)],
        #[case] first: i32,
        #[case] second: i32,
    ) {
        let config = ReplayConfig::from_lookup(lookup_in(variables)).unwrap();
        assert_eq!(config.first_write, first);
        assert_eq!(config.second_write, second);
    }

    #[rstest]
    #[case("REPLAY_FIRST_WRITE", "ten")]
    #[case("REPLAY_SECOND_WRITE", "")]
    #[case("REPLAY_SECOND_WRITE", "99999999999")]
    fn unparsable_value_is_an_error(#[case] key: &str, #[case] value: &str) {
        let error = ReplayConfig::from_lookup(lookup_in(&[(key, value)])).unwrap_err();
        let ConfigError::InvalidValue { key: reported, .. } = error;
        assert_eq!(reported, key);
    }
}
