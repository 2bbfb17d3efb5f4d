use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{Coordinate, GeoError};

/// Query parameters for `GET /api/events`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_events_query", skip_on_field_errors = false))]
pub struct EventsQuery {
    #[serde(default)]
    pub sport: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    pub radius: Option<f64>,
}

impl EventsQuery {
    /// Origin when both `lat` and `lng` were supplied
    pub fn origin(&self) -> Result<Option<Coordinate>, GeoError> {
        match (self.lat, self.lng) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude).map(Some),
            _ => Ok(None),
        }
    }
}

fn validate_events_query(query: &EventsQuery) -> Result<(), ValidationError> {
    if query.lat.is_some() != query.lng.is_some() {
        let mut err = ValidationError::new("origin_pair");
        err.message = Some("lat and lng must be given together".into());
        return Err(err);
    }
    validate_radius(query.radius)
}

fn validate_nearby_query(query: &NearbyQuery) -> Result<(), ValidationError> {
    validate_radius(query.radius)
}

/// NaN and infinity slip through `range`, since every comparison with NaN is false
fn validate_radius(radius: Option<f64>) -> Result<(), ValidationError> {
    match radius {
        Some(radius) if !radius.is_finite() => {
            let mut err = ValidationError::new("radius");
            err.message = Some("radius must be a finite number of kilometers".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Body of `POST /api/users/location`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    pub user_id: i64,
    #[validate(length(max = 64))]
    pub username: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[validate(length(max = 280))]
    pub comment: Option<String>,
    #[serde(default)]
    pub sports: Option<Vec<String>>,
}

/// Query parameters for `GET /api/users/nearby`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_nearby_query", skip_on_field_errors = false))]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub radius: Option<f64>,
}
