use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::time::Duration;

use crate::config::PresenceSettings;
use crate::core::find_nearby;
use crate::models::{Coordinate, NearbyUser, UpdateLocationRequest, UserPresence};

/// In-memory store of the last location each user shared
///
/// Entries expire after `max_age`, the same window used to hide stale
/// presences from nearby searches.
pub struct PresenceStore {
    cache: Cache<i64, UserPresence>,
    max_age: Duration,
}

impl PresenceStore {
    /// Create a new presence store
    pub fn new(max_age: Duration, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(max_age)
            .build();

        Self { cache, max_age }
    }

    pub fn from_settings(settings: &PresenceSettings) -> Self {
        Self::new(Duration::from_secs(settings.max_age_secs), settings.capacity)
    }

    /// Store a presence, replacing any earlier one for the same user
    pub async fn upsert(&self, presence: UserPresence) {
        tracing::debug!(
            "Presence updated for user {} at ({}, {})",
            presence.user_id,
            presence.coordinate.latitude,
            presence.coordinate.longitude
        );
        self.cache.insert(presence.user_id, presence).await;
    }

    /// Record a location update as a visible presence seen at `now`
    pub async fn record(&self, request: &UpdateLocationRequest, now: DateTime<Utc>) -> UserPresence {
        let presence = UserPresence {
            user_id: request.user_id,
            username: request.username.clone(),
            coordinate: Coordinate { latitude: request.lat, longitude: request.lng },
            comment: request.comment.clone(),
            sports: request.sports.clone().unwrap_or_default(),
            last_seen: now,
            is_visible: true,
        };

        self.upsert(presence.clone()).await;
        presence
    }

    pub async fn get(&self, user_id: i64) -> Option<UserPresence> {
        self.cache.get(&user_id).await
    }

    /// Users within `radius_km` of `origin` that are still fresh at `now`
    pub fn nearby(&self, origin: &Coordinate, radius_km: f64, now: DateTime<Utc>) -> Vec<NearbyUser> {
        let presences: Vec<UserPresence> = self.cache.iter().map(|(_, presence)| presence).collect();
        let max_age = chrono::Duration::from_std(self.max_age).unwrap_or_else(|_| chrono::Duration::weeks(52));

        find_nearby(&presences, origin, radius_km, now, max_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_id: i64, lat: f64, lng: f64) -> UpdateLocationRequest {
        UpdateLocationRequest {
            user_id,
            username: None,
            lat,
            lng,
            comment: Some("Ищу мероприятия рядом".to_string()),
            sports: Some(vec!["бег".to_string()]),
        }
    }

    #[tokio::test]
    async fn test_record_and_get() {
        let store = PresenceStore::from_settings(&PresenceSettings::default());
        let now = Utc::now();

        let stored = store.record(&request(1, 55.7558, 37.6173), now).await;
        assert!(stored.is_visible);
        assert_eq!(stored.last_seen, now);

        let fetched = store.get(1).await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_latest_update_wins() {
        let store = PresenceStore::from_settings(&PresenceSettings::default());
        let now = Utc::now();

        store.record(&request(1, 55.7558, 37.6173), now).await;
        store.record(&request(1, 59.9343, 30.3351), now).await;

        let origin = Coordinate { latitude: 55.7558, longitude: 37.6173 };
        assert!(store.nearby(&origin, 10.0, now).is_empty());

        let origin = Coordinate { latitude: 59.9343, longitude: 30.3351 };
        let nearby = store.nearby(&origin, 10.0, now);
        assert_eq!(nearby.len(), 1);
        assert_eq!(nearby[0].name, "User_1");
        assert_eq!(nearby[0].distance, 0.0);
    }

    #[tokio::test]
    async fn test_nearby_skips_stale_entries() {
        let store = PresenceStore::new(Duration::from_secs(3600), 100);
        let now = Utc::now();

        store.record(&request(1, 55.7558, 37.6173), now - chrono::Duration::hours(2)).await;
        store.record(&request(2, 55.7539, 37.6208), now).await;

        let origin = Coordinate { latitude: 55.7558, longitude: 37.6173 };
        let ids: Vec<i64> = store.nearby(&origin, 10.0, now).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
