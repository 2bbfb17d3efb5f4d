use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default search radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Errors raised when validating coordinates at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("Coordinate is not finite: ({0}, {1})")]
    NonFinite(f64, f64),

    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Build a validated coordinate
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::NonFinite(latitude, longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }

        Ok(Self { latitude, longitude })
    }

    /// Great-circle distance to another coordinate in kilometers
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::core::distance::distance_between(self, other)
    }
}

/// A sports event with a fixed place, date and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub sport: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// Current filter selections
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// `None` or an empty string matches every sport
    pub sport: Option<String>,
    pub radius_km: f64,
    /// Without an origin the radius is ignored
    pub origin: Option<Coordinate>,
}

impl FilterCriteria {
    /// The sport tag to match, if any
    pub fn sport_filter(&self) -> Option<&str> {
        self.sport.as_deref().filter(|s| !s.is_empty())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            sport: None,
            radius_km: DEFAULT_RADIUS_KM,
            origin: None,
        }
    }
}

/// Last location a user shared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPresence {
    pub user_id: i64,
    pub username: Option<String>,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub comment: Option<String>,
    #[serde(default)]
    pub sports: Vec<String>,
    pub last_seen: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
}

impl UserPresence {
    /// Display name, falling back to `User_<id>`
    pub fn display_name(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("User_{}", self.user_id),
        }
    }
}

fn default_true() -> bool { true }

/// A user found near an origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyUser {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub comment: Option<String>,
    pub sports: Vec<String>,
    /// Kilometers, rounded to two decimals
    pub distance: f64,
}
