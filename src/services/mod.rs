// Service exports
pub mod catalog;
pub mod events;
pub mod presence;

pub use catalog::static_events;
pub use events::{EventCatalog, EventSourceError, EventsClient};
pub use presence::PresenceStore;
