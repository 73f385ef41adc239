use serde::Deserialize;
use serde::Serialize;

use super::parse_number;
use super::Lookup;
use super::PrefsError;
use super::CENTER_LAT_VAR;
use super::CENTER_LNG_VAR;
use super::ZOOM_VAR;
use crate::geo::LatLng;
use crate::geo::MapParams;
use crate::geo::ZoomLevel;

/// Old Trafford, Manchester.
pub const DEFAULT_CENTER: LatLng = LatLng::new_unchecked(53.472225, -2.2935019);
pub const DEFAULT_ZOOM: ZoomLevel = ZoomLevel::new_unchecked(11);

/// Preferences for the map view.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MapPrefs {
    center: LatLng,
    zoom: ZoomLevel,
}

impl Default for MapPrefs {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapPrefs {
    /// Each unset variable keeps its default; set ones must parse and be in range.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, PrefsError> {
        let lat = parse_number::<f64>(lookup, CENTER_LAT_VAR)?.unwrap_or(DEFAULT_CENTER.lat());
        let lng = parse_number::<f64>(lookup, CENTER_LNG_VAR)?.unwrap_or(DEFAULT_CENTER.lng());
        let zoom = match parse_number::<u8>(lookup, ZOOM_VAR)? {
            Some(level) => ZoomLevel::new(level)?,
            None => DEFAULT_ZOOM,
        };

        Ok(Self {
            center: LatLng::new(lat, lng)?,
            zoom,
        })
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn params(&self) -> MapParams {
        MapParams {
            center: self.center,
            zoom: self.zoom,
        }
    }
}
