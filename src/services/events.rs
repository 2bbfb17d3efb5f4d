use crate::config::EventSourceSettings;
use crate::models::{Coordinate, Event};
use crate::services::catalog::static_events;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when loading events
#[derive(Debug, Error)]
pub enum EventSourceError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No remote event source configured")]
    NotConfigured,
}

/// Either a bare array of events, a `{status, data}` envelope, or a
/// `{status, message}` failure report
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventsPayload {
    List(Vec<Event>),
    Envelope {
        status: Option<String>,
        data: Vec<Event>,
        message: Option<String>,
    },
    Failure {
        status: String,
        message: Option<String>,
    },
}

impl EventsPayload {
    fn into_events(self) -> Result<Vec<Event>, EventSourceError> {
        let events = match self {
            EventsPayload::List(events) => events,
            EventsPayload::Envelope { status: Some(status), message, .. }
            | EventsPayload::Failure { status, message }
                if status == "error" =>
            {
                return Err(EventSourceError::ApiError(
                    message.unwrap_or_else(|| "unknown error".to_string()),
                ));
            }
            EventsPayload::Envelope { data, .. } => data,
            EventsPayload::Failure { status, .. } => {
                return Err(EventSourceError::InvalidResponse(format!(
                    "status \"{}\" without data",
                    status
                )));
            }
        };

        check_events(&events)?;
        Ok(events)
    }
}

/// Reject events the core cannot handle: bad coordinates or repeated ids
fn check_events(events: &[Event]) -> Result<(), EventSourceError> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        Coordinate::new(event.coordinate.latitude, event.coordinate.longitude)
            .map_err(|e| EventSourceError::InvalidResponse(format!("event {}: {}", event.id, e)))?;

        if !seen.insert(event.id) {
            return Err(EventSourceError::InvalidResponse(format!(
                "duplicate event id {}",
                event.id
            )));
        }
    }
    Ok(())
}

/// HTTP client for a remote events endpoint
pub struct EventsClient {
    url: String,
    client: Client,
}

impl EventsClient {
    /// Create a new events client
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, EventSourceError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Fetch events, optionally narrowed to one sport by the remote
    pub async fn fetch_events(&self, sport: Option<&str>) -> Result<Vec<Event>, EventSourceError> {
        let url = match sport.filter(|s| !s.is_empty()) {
            Some(sport) => {
                let separator = if self.url.contains('?') { '&' } else { '?' };
                format!("{}{}sport={}", self.url, separator, urlencoding::encode(sport))
            }
            None => self.url.clone(),
        };

        tracing::debug!("Fetching events from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EventSourceError::ApiError(format!(
                "Failed to fetch events: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let payload: EventsPayload = serde_json::from_str(&body)
            .map_err(|e| EventSourceError::InvalidResponse(e.to_string()))?;

        payload.into_events()
    }
}

/// Current event collection shared by all request handlers
///
/// Holds an immutable snapshot that `reload` swaps atomically, so readers
/// never observe a half-loaded list.
pub struct EventCatalog {
    client: Option<EventsClient>,
    fallback_to_static: bool,
    events: RwLock<Arc<[Event]>>,
}

impl EventCatalog {
    /// Build a catalog from settings; call [`EventCatalog::reload`] to populate it
    pub fn from_settings(settings: &EventSourceSettings) -> Result<Self, EventSourceError> {
        let client = match settings.url.as_deref() {
            Some(url) if !url.is_empty() => Some(EventsClient::new(
                url,
                Duration::from_secs(settings.timeout_secs),
            )?),
            _ => None,
        };

        Ok(Self {
            client,
            fallback_to_static: settings.fallback_to_static,
            events: RwLock::new(Arc::from(Vec::<Event>::new())),
        })
    }

    /// Catalog with a fixed event list and no remote source
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            client: None,
            fallback_to_static: false,
            events: RwLock::new(Arc::from(events)),
        }
    }

    /// Refresh the snapshot from the configured source
    ///
    /// Returns the number of events now in the catalog. When the remote fails
    /// and fallback is enabled, the built-in catalog is installed instead;
    /// otherwise the previous snapshot is kept and the error returned.
    pub async fn reload(&self) -> Result<usize, EventSourceError> {
        let events = match &self.client {
            Some(client) => match client.fetch_events(None).await {
                Ok(events) => {
                    tracing::info!("Loaded {} events from remote source", events.len());
                    events
                }
                Err(e) if self.fallback_to_static => {
                    tracing::warn!("Failed to load remote events ({}), using built-in catalog", e);
                    static_events()
                }
                Err(e) => {
                    tracing::error!("Failed to load remote events: {}", e);
                    return Err(e);
                }
            },
            None => {
                tracing::info!("No remote event source configured, using built-in catalog");
                static_events()
            }
        };

        let count = events.len();
        *self.events.write().await = Arc::from(events);
        Ok(count)
    }

    /// Current event snapshot
    pub async fn snapshot(&self) -> Arc<[Event]> {
        self.events.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }
}
