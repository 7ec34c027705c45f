//! # Proffy API
//!
//! The API crate provides the web server for the Proffy tutoring marketplace.
//! Students search for classes by subject, week day and time; tutors register
//! a class together with their weekly availability.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Validate requests and call the class store
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Storage is reached through the [`ClassStore`] handle held by [`ApiState`],
//! so handlers never touch a global connection.

/// Configuration module for API settings
pub mod config;
/// Request handlers for class search and creation
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use proffy_db::store::ClassStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```rust,ignore
/// let state = Arc::new(ApiState {
///     classes: Arc::new(PgClassStore::new(db_pool)),
/// });
/// let app = proffy_api::app(state);
/// ```
pub struct ApiState {
    /// Storage for users, classes and their weekly schedules
    pub classes: Arc<dyn ClassStore>,
}

/// Builds the application router with every route attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Class search and registration endpoints
        .merge(routes::classes::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and class store
///
/// This function initializes logging, builds the router with CORS, request
/// tracing and timeout layers, and serves it until the process exits.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `classes` - Storage handle shared by all handlers
///
/// # Example
///
/// ```rust,ignore
/// let config = ApiConfig::from_env()?;
/// let db_pool = proffy_db::create_pool(&config.database_url, config.database_max_connections).await?;
/// start_server(config, Arc::new(PgClassStore::new(db_pool))).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, classes: Arc<dyn ClassStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = app(Arc::new(ApiState { classes }));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allow_origin = if origins.iter().any(|origin| origin == "*") {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(parse_origins(origins))
        };

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(allow_origin);

        app.layer(cors)
    } else {
        app
    };

    // Request logging and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect()
}
