//! Geographic value types and the Web Mercator math used to frame the map widget.

use std::f64::consts::PI;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Tile edge length of the slippy-map tile scheme, in pixels.
const TILE_SIZE: f64 = 256.0;

/// Latitude beyond which Web Mercator is undefined.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Highest zoom level served by the OpenStreetMap tile servers.
pub const MAX_ZOOM: u8 = 19;

const OSM_EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";

/// An error constructing one of the geographic value types.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// Latitude is not a finite number in `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude is not a finite number in `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
    /// Zoom level is above [`MAX_ZOOM`].
    #[error("zoom level {0} is above {max}", max = MAX_ZOOM)]
    InvalidZoom(u8),
}

/// A validated WGS84 coordinate.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawLatLng", into = "RawLatLng")]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::InvalidLongitude(lng));
        }
        Ok(Self { lat, lng })
    }

    /// For compile-time constants already known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

#[derive(Serialize, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawLatLng> for LatLng {
    type Error = GeoError;

    fn try_from(raw: RawLatLng) -> Result<Self, Self::Error> {
        LatLng::new(raw.lat, raw.lng)
    }
}

impl From<LatLng> for RawLatLng {
    fn from(value: LatLng) -> Self {
        Self {
            lat: value.lat,
            lng: value.lng,
        }
    }
}

/// A slippy-map zoom level in `0..=MAX_ZOOM`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub fn new(level: u8) -> Result<Self, GeoError> {
        if level > MAX_ZOOM {
            return Err(GeoError::InvalidZoom(level));
        }
        Ok(Self(level))
    }

    pub(crate) const fn new_unchecked(level: u8) -> Self {
        Self(level)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Width of the whole world, in pixels, at this zoom.
    fn world_size(&self) -> f64 {
        TILE_SIZE * f64::from(1u32 << self.0)
    }
}

impl TryFrom<u8> for ZoomLevel {
    type Error = GeoError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<ZoomLevel> for u8 {
    fn from(zoom: ZoomLevel) -> Self {
        zoom.0
    }
}

/// The pixel size the map widget is assumed to occupy when framing the view.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// A geographic extent in degrees.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: LatLng) -> bool {
        (self.west..=self.east).contains(&point.lng())
            && (self.south..=self.north).contains(&point.lat())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6},{:.6},{:.6},{:.6}",
            self.west, self.south, self.east, self.north
        )
    }
}

/// Center and zoom of a map view.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MapParams {
    pub center: LatLng,
    pub zoom: ZoomLevel,
}

impl MapParams {
    /// The extent visible in `viewport` around `center` at `zoom`.
    pub fn bounding_box(&self, viewport: Viewport) -> BoundingBox {
        let world = self.zoom.world_size();
        let half_lng_span = viewport.width / 2.0 * 360.0 / world;

        let center_y = lat_to_world_y(self.center.lat());
        let half_height = viewport.height / 2.0 / world;
        let north = world_y_to_lat((center_y - half_height).max(0.0));
        let south = world_y_to_lat((center_y + half_height).min(1.0));

        BoundingBox {
            west: (self.center.lng() - half_lng_span).max(-180.0),
            south,
            east: (self.center.lng() + half_lng_span).min(180.0),
            north,
        }
    }

    /// URL of the OpenStreetMap embed page showing this view with a marker on the center.
    pub fn embed_url(&self) -> String {
        let bbox = self.bounding_box(Viewport::default());
        format!(
            "{OSM_EMBED_BASE}?bbox={bbox}&layer=mapnik&marker={}",
            self.center
        )
    }
}

/// Projects a latitude onto the unit-height Mercator world (0 = north edge).
fn lat_to_world_y(lat: f64) -> f64 {
    let sin = lat
        .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
        .to_radians()
        .sin();
    0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)
}

fn world_y_to_lat(y: f64) -> f64 {
    (PI * (1.0 - 2.0 * y)).sinh().atan().to_degrees()
}
