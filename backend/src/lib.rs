pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod upload;

use std::sync::Arc;

use service::{
    CertificateTemplateService, CheckinService, EventService, LocationService, UserService,
};

/// Shared application state available to all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventService>,
    pub users: Arc<UserService>,
    pub locations: Arc<LocationService>,
    pub certificate_templates: Arc<CertificateTemplateService>,
    pub checkins: Arc<CheckinService>,
}
