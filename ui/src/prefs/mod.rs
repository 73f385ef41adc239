//! Application preferences.
//!
//! Every value has a built-in default and can be overridden by a variable.
//! Native builds read the process environment at startup. Browser builds have
//! no process environment, so there the values are captured when the bundle is
//! compiled.

pub mod app_prefs;
pub mod image_prefs;
pub mod map_prefs;

use std::str::FromStr;

use dioxus_logger::tracing::Level;
use thiserror::Error;

use crate::geo::GeoError;

pub const DEFAULT_IMAGE_VAR: &str = "KITTEN_MAP_DEFAULT_IMAGE";
pub const CENTER_LAT_VAR: &str = "KITTEN_MAP_CENTER_LAT";
pub const CENTER_LNG_VAR: &str = "KITTEN_MAP_CENTER_LNG";
pub const ZOOM_VAR: &str = "KITTEN_MAP_ZOOM";
pub const LOG_VAR: &str = "KITTEN_MAP_LOG";

/// An error reading preferences.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrefsError {
    /// A variable holds text that does not parse as the expected number.
    #[error("{key} is not a valid number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    /// A variable does not name a log level.
    #[error("{key} is not a log level: {value:?}")]
    InvalidLogLevel { key: &'static str, value: String },
    /// The values parse but do not form a valid map view.
    #[error(transparent)]
    Geo(#[from] GeoError),
}

/// Source of raw preference values, keyed by variable name.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Reads `key` and parses it as a number, `Ok(None)` if it is unset or blank.
pub(crate) fn parse_number<T: FromStr>(
    lookup: Lookup<'_>,
    key: &'static str,
) -> Result<Option<T>, PrefsError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PrefsError::InvalidNumber { key, value: raw }),
        _ => Ok(None),
    }
}

/// Looks up a variable in the environment appropriate for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Looks up a variable in the environment appropriate for the current target.
#[cfg(target_arch = "wasm32")]
pub fn env_var(key: &str) -> Option<String> {
    let value = match key {
        DEFAULT_IMAGE_VAR => option_env!("KITTEN_MAP_DEFAULT_IMAGE"),
        CENTER_LAT_VAR => option_env!("KITTEN_MAP_CENTER_LAT"),
        CENTER_LNG_VAR => option_env!("KITTEN_MAP_CENTER_LNG"),
        ZOOM_VAR => option_env!("KITTEN_MAP_ZOOM"),
        LOG_VAR => option_env!("KITTEN_MAP_LOG"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Parses the log level from `lookup`, `INFO` when unset.
pub fn log_level_from_lookup(lookup: Lookup<'_>) -> Result<Level, PrefsError> {
    match lookup(LOG_VAR) {
        Some(raw) if !raw.trim().is_empty() => {
            Level::from_str(raw.trim()).map_err(|_| PrefsError::InvalidLogLevel {
                key: LOG_VAR,
                value: raw,
            })
        }
        _ => Ok(Level::INFO),
    }
}

/// The log level to initialise the logger with.
///
/// Called before any logger exists, so an unparsable value quietly becomes `INFO`.
pub fn log_level() -> Level {
    log_level_from_lookup(&env_var).unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_case_insensitively() {
        let lookup = |key: &str| (key == LOG_VAR).then(|| "Debug".to_string());
        assert_eq!(log_level_from_lookup(&lookup), Ok(Level::DEBUG));
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_level_from_lookup(&|_| None), Ok(Level::INFO));
        assert_eq!(log_level_from_lookup(&|_| Some("  ".into())), Ok(Level::INFO));
    }

    #[test]
    fn log_level_rejects_garbage() {
        let err = log_level_from_lookup(&|_| Some("loud".into())).unwrap_err();
        assert_eq!(
            err,
            PrefsError::InvalidLogLevel {
                key: LOG_VAR,
                value: "loud".into()
            }
        );
    }

    #[test]
    fn parse_number_reports_key_and_value() {
        let lookup = |_: &str| Some("eleven".to_string());
        let err = parse_number::<u8>(&lookup, ZOOM_VAR).unwrap_err();
        assert_eq!(err.to_string(), "KITTEN_MAP_ZOOM is not a valid number: \"eleven\"");
    }
}
