pub mod certificate_templates;
pub mod checkins;
pub mod display;
pub mod events;
pub mod locations;
pub mod users;

pub use certificate_templates::CertificateTemplateService;
pub use checkins::CheckinService;
pub use events::EventService;
pub use locations::LocationService;
pub use users::UserService;
