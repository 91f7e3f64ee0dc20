pub mod certificate_templates;
pub mod checkins;
pub mod events;
pub mod locations;
pub mod users;

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::AppState;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "certify-api" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        // Events
        .route("/api/events", get(events::list).post(events::create))
        .route("/api/events/display", get(events::list_display))
        .route(
            "/api/events/:id",
            get(events::get_one)
                .put(events::update)
                .delete(events::delete),
        )
        .route(
            "/api/events/:id/participants",
            get(events::list_participants).post(events::register_participant),
        )
        .route(
            "/api/events/:id/participants/:user_id",
            axum::routing::delete(events::unregister_participant),
        )
        .route("/api/events/:id/certificate", get(events::get_certificate))
        .route("/api/events/:id/checkins", get(checkins::list_by_event))
        // Users
        .route("/api/users", get(users::list).post(users::create))
        .route(
            "/api/users/:id",
            get(users::get_one).put(users::update).delete(users::delete),
        )
        // Locations
        .route("/api/locations", get(locations::list).post(locations::create))
        .route(
            "/api/locations/:id",
            get(locations::get_one)
                .put(locations::update)
                .delete(locations::delete),
        )
        // Certificate templates
        .route(
            "/api/certificate-templates",
            get(certificate_templates::list).post(certificate_templates::create),
        )
        .route(
            "/api/certificate-templates/:id",
            get(certificate_templates::get_one)
                .put(certificate_templates::update)
                .delete(certificate_templates::delete),
        )
        // Check-ins
        .route("/api/checkins", post(checkins::record))
        .route(
            "/api/checkins/:id",
            get(checkins::get_one).delete(checkins::delete),
        )
        .with_state(state)
}
