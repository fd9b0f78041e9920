//! Weather Records API Server
//!
//! REST transport for the record engine: maps HTTP verbs and paths onto
//! the lifecycle operations and serializes their outcomes. Dispatch is
//! on parsed paths, so the literal `latest`/`stats`/`date`/`station`
//! routes can never be shadowed by the `:id` route.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use record_engine::RecordService;
use serde::Serialize;
use std::sync::Arc;
use storage::{Datastore, StoreConfig};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody};

/// Application state shared across handlers
pub struct AppState {
    /// Record lifecycle controller
    pub service: RecordService,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state backed by the given store config
    pub fn new(store: StoreConfig) -> Self {
        Self {
            service: RecordService::new(Datastore::new(store)),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
    pub metrics: CollectionMetrics,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub store: ComponentHealth,
}

/// Individual component health
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

/// Collection sizes
#[derive(Debug, Serialize)]
pub struct CollectionMetrics {
    pub record_count: usize,
    pub alert_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route(
            "/api/v1/records",
            post(routes::records::create).get(routes::records::list),
        )
        .route("/api/v1/records/latest", get(routes::records::latest))
        .route("/api/v1/records/stats", get(routes::records::stats))
        .route("/api/v1/records/date/:date", get(routes::records::by_date))
        .route(
            "/api/v1/records/station/:name",
            get(routes::records::by_station),
        )
        .route(
            "/api/v1/records/:id",
            get(routes::records::get_one)
                .put(routes::records::replace)
                .patch(routes::records::merge)
                .delete(routes::records::delete),
        )
        .route(
            "/api/v1/alerts",
            post(routes::alerts::create).get(routes::alerts::list),
        )
        .route("/api/v1/alerts/:id", delete(routes::alerts::delete))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let record_count = state.service.record_count().await;
    let alert_count = state.service.alert_count().await;
    let store_status = if record_count.is_ok() && alert_count.is_ok() {
        "ok"
    } else {
        "unavailable"
    };
    let status = if store_status == "ok" { "healthy" } else { "degraded" };

    let response = HealthResponse {
        status: status.to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            store: ComponentHealth {
                status: store_status.to_string(),
            },
        },
        metrics: CollectionMetrics {
            record_count: record_count.unwrap_or(0),
            alert_count: alert_count.unwrap_or(0),
        },
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(StoreConfig {
        uri: config.store_uri.clone(),
    }));
    let app = create_router(state);

    let addr = config.bind_addr();
    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
