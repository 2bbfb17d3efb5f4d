use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{Coordinate, NearbyQuery, UpdateLocationRequest, UpdateLocationResponse};
use crate::routes::{invalid_coordinate, validation_failed, AppState};

/// Configure user presence routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users/location", web::post().to(update_location))
        .route("/users/nearby", web::get().to(get_nearby_users));
}

/// Share a user's current location
///
/// POST /api/users/location
///
/// Request body:
/// ```json
/// {
///   "user_id": 123456789,
///   "username": "demo_user",
///   "lat": 55.7558,
///   "lng": 37.6173,
///   "comment": "string",
///   "sports": ["бег"]
/// }
/// ```
async fn update_location(
    state: web::Data<AppState>,
    req: web::Json<UpdateLocationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for location update: {:?}", errors);
        return validation_failed(errors);
    }

    state.presence.record(&req, chrono::Utc::now()).await;

    HttpResponse::Ok().json(UpdateLocationResponse {
        status: "success".to_string(),
        message: "Location updated".to_string(),
        presence_id: uuid::Uuid::new_v4().to_string(),
    })
}

/// Users who shared a location near a point recently
///
/// GET /api/users/nearby?lat={lat}&lng={lng}&radius={km}
async fn get_nearby_users(
    state: web::Data<AppState>,
    query: web::Query<NearbyQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let origin = match Coordinate::new(query.lat, query.lng) {
        Ok(origin) => origin,
        Err(e) => return invalid_coordinate(e),
    };
    let radius_km = query.radius.unwrap_or(state.filters.default_radius_km);

    let nearby = state.presence.nearby(&origin, radius_km, chrono::Utc::now());
    tracing::debug!("Found {} users within {}km of ({}, {})", nearby.len(), radius_km, origin.latitude, origin.longitude);

    HttpResponse::Ok().json(nearby)
}
