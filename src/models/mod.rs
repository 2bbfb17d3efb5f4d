// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Event, FilterCriteria, GeoError, NearbyUser, UserPresence, DEFAULT_RADIUS_KM};
pub use requests::{EventsQuery, NearbyQuery, UpdateLocationRequest};
pub use responses::{ErrorResponse, HealthResponse, ServiceInfo, UpdateLocationResponse};
