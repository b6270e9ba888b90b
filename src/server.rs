// ABOUTME: HTTP server assembly: router composition, middleware layers, and serving
// ABOUTME: Binds the listener and shuts down gracefully on Ctrl-C or SIGTERM
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Meal Planner Contributors

use crate::middleware::{make_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{AuthRoutes, HealthRoutes, MealPlanRoutes, ProfileRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Compose every route group with tracing and CORS layers
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(MealPlanRoutes::routes(resources))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(cors)
}

/// Serve on `0.0.0.0:{port}` until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    serve(listener, resources).await
}

/// Serve on an already bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received, draining connections");
}
