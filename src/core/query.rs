use std::sync::Arc;

use crate::config::FilterSettings;
use crate::core::filters::filter_events;
use crate::models::{Coordinate, Event, FilterCriteria};

/// Holds the current filter selections and event collection
///
/// The filtered view is derived on every read from the current inputs, so it
/// can never go stale. The container performs no I/O: event sources and
/// location providers push values in through the setters.
#[derive(Debug, Clone)]
pub struct QueryState {
    events: Arc<[Event]>,
    criteria: FilterCriteria,
}

impl QueryState {
    pub fn new() -> Self {
        Self::with_events(Vec::<Event>::new())
    }

    /// Create a container over an existing event snapshot
    pub fn with_events(events: impl Into<Arc<[Event]>>) -> Self {
        Self {
            events: events.into(),
            criteria: FilterCriteria::default(),
        }
    }

    /// Create an empty container seeded with the configured default radius
    pub fn from_settings(settings: &FilterSettings) -> Self {
        let mut state = Self::new();
        state.criteria.radius_km = settings.default_radius_km;
        state
    }

    /// Replace the event collection
    pub fn set_events(&mut self, events: impl Into<Arc<[Event]>>) {
        self.events = events.into();
        tracing::trace!("Query events replaced ({} events)", self.events.len());
    }

    /// Select a sport; `None` or `""` matches every sport
    pub fn set_sport<S: Into<String>>(&mut self, sport: Option<S>) {
        self.criteria.sport = sport.map(Into::into);
    }

    pub fn set_radius(&mut self, radius_km: f64) {
        self.criteria.radius_km = radius_km;
    }

    pub fn set_origin(&mut self, origin: Coordinate) {
        self.criteria.origin = Some(origin);
    }

    /// Forget the origin, e.g. when location becomes unavailable
    pub fn clear_origin(&mut self) {
        self.criteria.origin = None;
    }

    /// Apply a location fix, or `None` when the location source is unavailable
    pub fn update_origin(&mut self, origin: Option<Coordinate>) {
        self.criteria.origin = origin;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Events matching the current criteria, in collection order
    pub fn filtered_events(&self) -> Vec<&Event> {
        filter_events(self.events.iter(), &self.criteria)
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_RADIUS_KM;
    use chrono::NaiveDate;

    fn create_event(id: u64, sport: &str, lat: f64, lng: f64) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: String::new(),
            sport: sport.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 20).unwrap(),
            location: String::new(),
            coordinate: Coordinate { latitude: lat, longitude: lng },
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            create_event(1, "бег", 55.710, 37.553),
            create_event(2, "велоспорт", 55.731, 37.603),
            create_event(3, "лыжи", 55.756, 37.438),
            create_event(4, "йога", 55.795, 37.679),
        ]
    }

    fn ids(state: &QueryState) -> Vec<u64> {
        state.filtered_events().iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_defaults() {
        let state = QueryState::new();

        assert_eq!(state.criteria().radius_km, DEFAULT_RADIUS_KM);
        assert_eq!(state.criteria().sport_filter(), None);
        assert_eq!(state.criteria().origin, None);
        assert!(state.filtered_events().is_empty());
    }

    #[test]
    fn test_from_settings_uses_configured_radius() {
        let state = QueryState::from_settings(&FilterSettings { default_radius_km: 25.0 });
        assert_eq!(state.criteria().radius_km, 25.0);
    }

    #[test]
    fn test_view_tracks_every_setter() {
        let mut state = QueryState::with_events(sample());
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);

        state.set_sport(Some("йога"));
        assert_eq!(ids(&state), vec![4]);

        state.set_sport(None::<String>);
        state.set_origin(Coordinate { latitude: 55.710, longitude: 37.553 });
        state.set_radius(5.0);
        assert_eq!(ids(&state), vec![1, 2]);

        state.set_radius(50.0);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);

        state.set_radius(1.0);
        state.clear_origin();
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);

        state.update_origin(Some(Coordinate { latitude: 55.795, longitude: 37.679 }));
        assert_eq!(ids(&state), vec![4]);

        state.set_events(vec![create_event(9, "йога", 55.795, 37.679)]);
        assert_eq!(ids(&state), vec![9]);
    }

    #[test]
    fn test_empty_sport_string_matches_all() {
        let mut state = QueryState::with_events(sample());
        state.set_sport(Some(""));
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    }
}
