//! # Rollcall API
//!
//! The API crate provides the web server for the Rollcall attendance tracker.
//! An administrator logs in, manages the member roster, marks morning and
//! evening presence for the current day and commits (locks) each session.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into `rollcall-core` operations
//! - **Middleware**: Admin sessions, the commit secret and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; persistence sits behind the
//! `rollcall-core` store traits, backed by PostgreSQL in production.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Periodic liveness ping
pub mod heartbeat;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use eyre::Result;
use rollcall_core::{date::DateKeyResolver, store::AttendanceStore};
use rollcall_db::PgStore;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::middleware::{auth::AdminSecret, session::SessionStore};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use rollcall_api::ApiState;
/// use rollcall_core::store::memory::MemoryStore;
///
/// let state = ApiState::new(Arc::new(MemoryStore::new()), None, chrono::Duration::hours(12), Default::default());
/// let app = rollcall_api::router(Arc::new(state));
/// ```
pub struct ApiState {
    /// Members, the DailyStatus ledger and the attendance register
    pub store: Arc<dyn AttendanceStore>,
    /// Secret for login and commit, `None` when the server has none configured
    pub admin_secret: Option<AdminSecret>,
    /// Live admin sessions
    pub sessions: SessionStore,
    /// Decides which date key "today" is
    pub dates: DateKeyResolver,
}

impl ApiState {
    pub fn new(
        store: Arc<dyn AttendanceStore>,
        admin_secret: Option<AdminSecret>,
        session_ttl: chrono::Duration,
        dates: DateKeyResolver,
    ) -> Self {
        Self {
            store,
            admin_secret,
            sessions: SessionStore::new(session_ttl),
            dates,
        }
    }

    /// Builds the state from configuration. Fails on an unknown timezone, an
    /// out-of-range session lifetime or a malformed admin hash.
    pub fn from_config(config: &config::ApiConfig, store: Arc<dyn AttendanceStore>) -> Result<Self> {
        let admin_secret = config.admin_secret()?;
        if admin_secret.is_none() {
            warn!("No ADMIN_PASSWORD_HASH or ADMIN_PASSWORD set; login and commit will fail");
        }

        Ok(Self::new(
            store,
            admin_secret,
            config.session_ttl()?,
            config.date_resolver()?,
        ))
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn router(state: Arc<ApiState>) -> Router {
    let protected = Router::new()
        .merge(routes::auth::protected_routes())
        .merge(routes::members::routes())
        .merge(routes::attendance::routes())
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state),
            middleware::auth::require_admin,
        ));

    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Login
        .merge(routes::auth::routes())
        // Everything behind an admin session
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, spawns the heartbeat, configures routes and serves
/// HTTP until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let store: Arc<dyn AttendanceStore> = Arc::new(PgStore::new(db_pool));
    let state = Arc::new(ApiState::from_config(&config, store)?);
    info!(
        "Attendance dates keyed in {}",
        state.dates.timezone().name()
    );

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(Duration::from_secs(config.request_timeout)),
    );

    if config.heartbeat_interval > 0 {
        heartbeat::spawn_heartbeat(
            config.heartbeat_url(),
            Duration::from_secs(config.heartbeat_interval),
        );
    }

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
