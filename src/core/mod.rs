// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod nearby;
pub mod query;

pub use distance::{distance_between, haversine_distance, EARTH_RADIUS_KM};
pub use filters::{filter_events, matches_criteria, matches_sport, within_radius};
pub use nearby::{find_nearby, is_discoverable, DEFAULT_PRESENCE_MAX_AGE_SECS};
pub use query::QueryState;
