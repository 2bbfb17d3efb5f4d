use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::QueryState;
use crate::models::EventsQuery;
use crate::routes::{invalid_coordinate, validation_failed, AppState};

/// Configure event routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events));
}

/// List events
///
/// GET /api/events?sport={sport}&lat={lat}&lng={lng}&radius={km}
///
/// `lat` and `lng` go together; without them `radius` has no effect.
async fn get_events(
    state: web::Data<AppState>,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for events query: {:?}", errors);
        return validation_failed(errors);
    }

    let origin = match query.origin() {
        Ok(origin) => origin,
        Err(e) => return invalid_coordinate(e),
    };

    tracing::info!(
        "Fetching events with filters: sport={:?}, lat={:?}, lng={:?}, radius={:?}",
        query.sport,
        query.lat,
        query.lng,
        query.radius
    );

    let mut view = QueryState::from_settings(&state.filters);
    view.set_events(state.catalog.snapshot().await);
    view.set_sport(query.sport.clone());
    if let Some(radius) = query.radius {
        view.set_radius(radius);
    }
    view.update_origin(origin);

    let events = view.filtered_events();
    tracing::info!("Returning {} of {} events", events.len(), view.events().len());

    HttpResponse::Ok().json(events)
}
