//! # Titlepage
//!
//! Backend for the title-page generator. Two jobs:
//!
//! - Serve faculty autocomplete lookups against a static newline-delimited
//!   JSON dataset, loaded once per process and cached for its lifetime.
//! - Proxy submission payloads to the external document-generation service
//!   and relay the generated `.docx` back to the caller as an attachment.
//!
//! The submission payload itself is opaque to the proxy; its typed model and
//! the form-construction rules (submitter cap, USN prefixing) live in
//! [`submission`] for clients and tests.
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, services::ServeFile};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod faculty;
pub mod routes;
pub mod state;
pub mod submission;

use routes::{faculty_handler, generate_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

/// Builds the application router. Public so integration tests can drive the
/// app through `tower::ServiceExt::oneshot` without binding a socket.
pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/titlepage", post(generate_handler))
        .route("/api/faculty", get(faculty_handler))
        .route_service(
            "/faculty.jsonl",
            ServeFile::new(&state.config.faculty_path),
        )
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
