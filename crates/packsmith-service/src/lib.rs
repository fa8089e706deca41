//! # Packsmith Service
//!
//! HTTP API over the pack solver and the pack-size store.
//!
//! ## Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/api/v1/packs/calculate?orderItemQuantity=N` | Packs to ship for N items |
//! | GET | `/api/v1/packs/sizes` | Configured sizes, largest first |
//! | POST | `/api/v1/packs/sizes` | Add a size, body `{"size": N}` |
//! | DELETE | `/api/v1/packs/sizes` | Remove a size, body `{"size": N}` |
//! | GET | `/health` | Liveness, plain `ok` |
//!
//! Every `/api` response uses the [`ApiResponse`] envelope.

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use response::ApiResponse;
pub use state::AppState;

/// Builds the application router.
pub fn app(state: AppState) -> Router {
    let request_timeout = state.request_timeout();

    let packs = Router::new()
        .route("/calculate", get(routes::calculate))
        .route(
            "/sizes",
            get(routes::list_sizes)
                .post(routes::add_size)
                .delete(routes::remove_size),
        );

    Router::new()
        .nest("/api/v1/packs", packs)
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    ApiError::Internal(format!("handler panicked: {details}")).into_response()
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!(event = "shutdown_signal", "shutting down");
}
