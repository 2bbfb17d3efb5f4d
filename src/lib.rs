//! SportMap - location-aware sports event filtering
//!
//! The core is a pure filtering engine: a haversine distance function, a
//! sport/radius event filter and a query state container that derives the
//! filtered view from its current inputs. Around it sit an in-memory presence
//! store for nearby-people search and an actix-web service.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_events, find_nearby, haversine_distance, QueryState};
pub use models::{Coordinate, Event, FilterCriteria, GeoError, NearbyUser, UserPresence};
