use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use super::env_var;
use super::image_prefs::ImagePrefs;
use super::map_prefs::MapPrefs;
use super::Lookup;
use super::PrefsError;

/// Represents all application prefs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppPrefs {
    image: ImagePrefs,
    map: MapPrefs,
}

impl AppPrefs {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, PrefsError> {
        Ok(Self {
            image: ImagePrefs::from_lookup(lookup),
            map: MapPrefs::from_lookup(lookup)?,
        })
    }

    /// Reads prefs from the environment, falling back to the defaults if any
    /// variable is invalid.
    pub fn from_env() -> Self {
        match Self::from_lookup(&env_var) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("ignoring invalid prefs, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn image(&self) -> &ImagePrefs {
        &self.image
    }

    pub fn map(&self) -> &MapPrefs {
        &self.map
    }
}
