use crate::models::{Coordinate, Event, FilterCriteria};

/// Check if an event belongs to the requested sport
///
/// Exact, case-sensitive comparison. `None` matches every event.
#[inline]
pub fn matches_sport(event: &Event, sport: Option<&str>) -> bool {
    match sport {
        Some(sport) => event.sport == sport,
        None => true,
    }
}

/// Check if an event lies within `radius_km` of `origin` (inclusive)
///
/// Without an origin there is nothing to measure from, so every event passes.
#[inline]
pub fn within_radius(event: &Event, origin: Option<&Coordinate>, radius_km: f64) -> bool {
    match origin {
        Some(origin) => origin.distance_to(&event.coordinate) <= radius_km,
        None => true,
    }
}

/// Check if an event satisfies both the sport and the radius predicate
#[inline]
pub fn matches_criteria(event: &Event, criteria: &FilterCriteria) -> bool {
    matches_sport(event, criteria.sport_filter())
        && within_radius(event, criteria.origin.as_ref(), criteria.radius_km)
}

/// Produce the filtered view of `events` for `criteria`
///
/// Stable: the result keeps the input order and borrows from `events`.
pub fn filter_events<'a, I>(events: I, criteria: &FilterCriteria) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| matches_criteria(event, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_event(id: u64, sport: &str, lat: f64, lng: f64) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: String::new(),
            sport: sport.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            location: "Москва".to_string(),
            coordinate: Coordinate { latitude: lat, longitude: lng },
        }
    }

    fn create_test_events() -> Vec<Event> {
        vec![
            create_test_event(1, "бег", 55.710, 37.553),
            create_test_event(2, "велоспорт", 55.731, 37.603),
            create_test_event(3, "лыжи", 55.756, 37.438),
            create_test_event(4, "йога", 55.795, 37.679),
        ]
    }

    fn ids(view: &[&Event]) -> Vec<u64> {
        view.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_no_criteria_returns_everything_in_order() {
        let events = create_test_events();
        let view = filter_events(&events, &FilterCriteria::default());

        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sport_filter() {
        let events = create_test_events();
        let criteria = FilterCriteria {
            sport: Some("бег".to_string()),
            ..Default::default()
        };

        assert_eq!(ids(&filter_events(&events, &criteria)), vec![1]);
    }

    #[test]
    fn test_sport_filter_is_case_sensitive() {
        let events = vec![create_test_event(1, "Tennis", 0.0, 0.0)];
        let criteria = FilterCriteria {
            sport: Some("tennis".to_string()),
            ..Default::default()
        };

        assert!(filter_events(&events, &criteria).is_empty());
    }

    #[test]
    fn test_radius_ignored_without_origin() {
        let events = create_test_events();
        let criteria = FilterCriteria {
            radius_km: 0.001,
            ..Default::default()
        };

        assert_eq!(filter_events(&events, &criteria).len(), 4);
    }

    #[test]
    fn test_radius_filter() {
        let events = create_test_events();
        let criteria = FilterCriteria {
            radius_km: 5.0,
            origin: Some(Coordinate { latitude: 55.710, longitude: 37.553 }),
            ..Default::default()
        };

        let view = filter_events(&events, &criteria);
        assert_eq!(ids(&view), vec![1, 2]);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let origin = Coordinate { latitude: 55.710, longitude: 37.553 };
        let events = create_test_events();
        let exact = origin.distance_to(&events[1].coordinate);

        let criteria = FilterCriteria {
            radius_km: exact,
            origin: Some(origin),
            ..Default::default()
        };

        assert_eq!(ids(&filter_events(&events, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_event_at_origin_with_zero_radius() {
        let events = create_test_events();
        let criteria = FilterCriteria {
            radius_km: 0.0,
            origin: Some(events[0].coordinate),
            ..Default::default()
        };

        assert_eq!(ids(&filter_events(&events, &criteria)), vec![1]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = create_test_events();
        let criteria = FilterCriteria {
            sport: Some("велоспорт".to_string()),
            radius_km: 10.0,
            origin: Some(Coordinate { latitude: 55.7558, longitude: 37.6173 }),
        };

        let once = filter_events(&events, &criteria);
        let twice = filter_events(once.iter().copied(), &criteria);
        assert_eq!(once, twice);
    }
}
