use serde::Deserialize;
use serde::Serialize;

use super::Lookup;
use super::DEFAULT_IMAGE_VAR;

/// The image shown by an image toggle before it is first clicked.
pub const DEFAULT_IMAGE_SOURCE: &str = "https://placekitten.com/1000/1500";

/// Preferences for image toggles.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePrefs {
    default_source: String,
}

impl Default for ImagePrefs {
    fn default() -> Self {
        Self {
            default_source: DEFAULT_IMAGE_SOURCE.to_string(),
        }
    }
}

impl ImagePrefs {
    /// Any string is accepted, including an empty one.
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        match lookup(DEFAULT_IMAGE_VAR) {
            Some(source) => Self {
                default_source: source,
            },
            None => Self::default(),
        }
    }

    pub fn default_source(&self) -> &str {
        &self.default_source
    }
}
