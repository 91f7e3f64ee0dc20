use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use certify_backend::{
    api, config,
    service::{
        CertificateTemplateService, CheckinService, EventService, LocationService, UserService,
    },
    store::postgres::{
        PgCertificateStore, PgCertificateTemplateStore, PgCheckinStore, PgDateRangeStore,
        PgEventStore, PgLocationStore, PgParticipantStore, PgUserStore,
    },
    upload::StorageUploader,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::Config::from_env()?;

    // Database pool
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&cfg.database_url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Database connected and migrations applied");

    let uploader = Arc::new(StorageUploader::new(
        cfg.storage_api_base.clone(),
        cfg.storage_bucket.clone(),
        cfg.storage_token.clone(),
    ));

    let event_store = Arc::new(PgEventStore::new(pool.clone()));
    let user_store = Arc::new(PgUserStore::new(pool.clone()));
    let location_store = Arc::new(PgLocationStore::new(pool.clone()));
    let date_range_store = Arc::new(PgDateRangeStore::new(pool.clone()));
    let certificate_store = Arc::new(PgCertificateStore::new(pool.clone()));
    let template_store = Arc::new(PgCertificateTemplateStore::new(pool.clone()));
    let participant_store = Arc::new(PgParticipantStore::new(pool.clone()));
    let checkin_store = Arc::new(PgCheckinStore::new(pool));

    let state = AppState {
        events: Arc::new(EventService::new(
            event_store.clone(),
            user_store.clone(),
            location_store.clone(),
            date_range_store,
            certificate_store,
            participant_store,
            uploader,
        )),
        users: Arc::new(UserService::new(user_store.clone())),
        locations: Arc::new(LocationService::new(location_store)),
        certificate_templates: Arc::new(CertificateTemplateService::new(template_store)),
        checkins: Arc::new(CheckinService::new(checkin_store, event_store, user_store)),
    };

    // CORS
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(
            cfg.cors_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        );

    let app = api::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr).await?;
    tracing::info!("Listening on {}", cfg.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
