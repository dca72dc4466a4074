//! Backend of a household food-inventory tracker.
//!
//! Users register perishable items with an expiration date, pick the food from an autocomplete
//! list and get warned when something is about to go off.
//!
//!
//!
//! # Routes
//! - `GET /api/foods?q=` autocomplete, see [`search`]. Always 200, worst case `[]`.
//! - `GET /api/debug/foods-count` catalog size.
//! - `POST /api/debug/foods-rebuild` rebuild the catalog from `FOODS_PATH` and swap it in.
//! - `GET /api/expiry?date=YYYY-MM-DD` expiration status, see [`expiry`].
//! - Anything else is served from `PUBLIC_DIR`.
//!
//!
//!
//! # Configuration
//!
//! | variable           | default            |
//! |--------------------|--------------------|
//! | `RUST_PORT`        | `3000`             |
//! | `FOODS_PATH`       | `foods.json`       |
//! | `FOODS_INDEX_PATH` | `foods.index.json` |
//! | `PUBLIC_DIR`       | `public`           |
//!
//! Logging is controlled with `RUST_LOG`.
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run -p pantry
//! ```
//!
//! Rebuild the snapshot by hand.
//! ```sh
//! cargo run -p process -- foods.json foods.index.json --query kjott
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
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
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod expiry;
pub mod routes;
pub mod search;
pub mod state;
pub mod utils;

use routes::{expiry_handler, foods_count_handler, rebuild_handler, search_handler};
use state::State;

pub async fn start_server() -> std::io::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/foods", get(search_handler))
        .route("/api/debug/foods-count", get(foods_count_handler))
        .route("/api/debug/foods-rebuild", post(rebuild_handler))
        .route("/api/expiry", get(expiry_handler))
        .fallback_service(ServeDir::new(&state.config.public_dir))
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
