use chrono::{DateTime, Duration, Utc};

use crate::models::{Coordinate, NearbyUser, UserPresence};

/// Presences older than this are no longer shown
pub const DEFAULT_PRESENCE_MAX_AGE_SECS: i64 = 7200;

/// Check if a presence is recent enough and the user agreed to be seen
#[inline]
pub fn is_discoverable(presence: &UserPresence, now: DateTime<Utc>, max_age: Duration) -> bool {
    presence.is_visible && now.signed_duration_since(presence.last_seen) <= max_age
}

/// Find users near `origin`
///
/// # Pipeline Stages
/// 1. Drop stale or hidden presences
/// 2. Drop presences farther than `radius_km` (inclusive boundary)
/// 3. Sort by distance, then user id
pub fn find_nearby<'a, I>(
    presences: I,
    origin: &Coordinate,
    radius_km: f64,
    now: DateTime<Utc>,
    max_age: Duration,
) -> Vec<NearbyUser>
where
    I: IntoIterator<Item = &'a UserPresence>,
{
    let mut nearby: Vec<(f64, NearbyUser)> = presences
        .into_iter()
        .filter(|presence| is_discoverable(presence, now, max_age))
        .filter_map(|presence| {
            let distance_km = origin.distance_to(&presence.coordinate);
            // Written as a negated `<=` so a NaN radius or distance excludes
            if !(distance_km <= radius_km) {
                return None;
            }

            Some((
                distance_km,
                NearbyUser {
                    id: presence.user_id,
                    name: presence.display_name(),
                    lat: presence.coordinate.latitude,
                    lng: presence.coordinate.longitude,
                    comment: presence.comment.clone(),
                    sports: presence.sports.clone(),
                    distance: round_km(distance_km),
                },
            ))
        })
        .collect();

    nearby.sort_by(|(da, a), (db, b)| {
        da.partial_cmp(db)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    nearby.into_iter().map(|(_, user)| user).collect()
}

fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
