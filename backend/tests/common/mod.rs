#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;

use certify_backend::api;
use certify_backend::error::Result;
use certify_backend::service::{
    CertificateTemplateService, CheckinService, EventService, LocationService, UserService,
};
use certify_backend::store::memory::{
    MemoryCertificateStore, MemoryCertificateTemplateStore, MemoryCheckinStore,
    MemoryDateRangeStore, MemoryEventStore, MemoryLocationStore, MemoryParticipantStore,
    MemoryUserStore,
};
use certify_backend::upload::{ImagePayload, ImageUploader};
use certify_backend::AppState;

pub const UPLOADED_IMAGE_URL: &str =
    "https://storage.test/v0/b/certify/o/background.png?alt=media";

/// Uploader double: hands back a fixed URL without talking to a provider.
struct StaticUploader;

#[async_trait]
impl ImageUploader for StaticUploader {
    async fn upload(&self, _image: &ImagePayload) -> Result<String> {
        Ok(UPLOADED_IMAGE_URL.into())
    }
}

/// Spin up a real Axum server on a random port over fresh in-memory stores,
/// returning its address. Each test gets its own state, so there is no
/// cross-test cleanup to do.
pub async fn setup_test_app() -> SocketAddr {
    let event_store = Arc::new(MemoryEventStore::default());
    let user_store = Arc::new(MemoryUserStore::default());
    let location_store = Arc::new(MemoryLocationStore::default());
    let date_range_store = Arc::new(MemoryDateRangeStore::default());
    let certificate_store = Arc::new(MemoryCertificateStore::default());
    let template_store = Arc::new(MemoryCertificateTemplateStore::default());
    let participant_store = Arc::new(MemoryParticipantStore::default());
    let checkin_store = Arc::new(MemoryCheckinStore::default());

    let state = AppState {
        events: Arc::new(EventService::new(
            event_store.clone(),
            user_store.clone(),
            location_store.clone(),
            date_range_store,
            certificate_store,
            participant_store,
            Arc::new(StaticUploader),
        )),
        users: Arc::new(UserService::new(user_store.clone())),
        locations: Arc::new(LocationService::new(location_store)),
        certificate_templates: Arc::new(CertificateTemplateService::new(template_store)),
        checkins: Arc::new(CheckinService::new(checkin_store, event_store, user_store)),
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// POST a user and return its id.
pub async fn create_user(client: &reqwest::Client, addr: SocketAddr, name: &str) -> uuid::Uuid {
    let resp = client
        .post(format!("http://{}/api/users", addr))
        .json(&serde_json::json!({
            "name": name,
            "email": format!("{}@example.org", name),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().parse().unwrap()
}

/// POST a location and return its id.
pub async fn create_location(
    client: &reqwest::Client,
    addr: SocketAddr,
    auditorium: &str,
) -> uuid::Uuid {
    let resp = client
        .post(format!("http://{}/api/locations", addr))
        .json(&serde_json::json!({ "auditorium": auditorium }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().parse().unwrap()
}
