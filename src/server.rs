// ABOUTME: HTTP server assembly: merges the domain routers, adds tracing and CORS, serves with graceful shutdown
// ABOUTME: Open connections get a bounded grace period after the shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FusionFlavors

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use fusion_core::constants::defaults;

use crate::context::AppContext;
use crate::middleware::setup_cors;
use crate::routes::{
    AuthRoutes, CookRoutes, FusionRoutes, HealthRoutes, RecipeRoutes, SavedRoutes, ShareRoutes,
};

/// Build the complete application router
pub fn build_router(ctx: AppContext) -> Router {
    let cors = setup_cors(&ctx.config);
    Router::new()
        .merge(HealthRoutes::routes(ctx.clone()))
        .merge(RecipeRoutes::routes(ctx.clone()))
        .merge(FusionRoutes::routes(ctx.clone()))
        .merge(ShareRoutes::routes(ctx.clone()))
        .merge(SavedRoutes::routes(ctx.clone()))
        .merge(AuthRoutes::routes(ctx.clone()))
        .merge(CookRoutes::routes(ctx))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the configured port and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails
pub async fn serve(ctx: AppContext) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", ctx.config.http_port))?;
    info!(%addr, "HTTP server listening");
    serve_with_shutdown(listener, ctx, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
///
/// After `shutdown` resolves, in-flight requests and open cooking sockets get
/// a grace period before the server stops waiting for them.
///
/// # Errors
///
/// Returns an error if the server fails
pub async fn serve_with_shutdown<F>(listener: TcpListener, ctx: AppContext, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let signal = async move {
        shutdown.await;
        let _ = signalled_tx.send(());
    };

    let server = axum::serve(listener, build_router(ctx))
        .with_graceful_shutdown(signal)
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.context("HTTP server failed"),
        _ = signalled_rx => info!("Shutdown signal received, draining connections"),
    }

    let grace = Duration::from_secs(defaults::SHUTDOWN_GRACE_SECS);
    match tokio::time::timeout(grace, server).await {
        Ok(result) => result.context("HTTP server failed during shutdown"),
        Err(_) => {
            warn!(grace_secs = grace.as_secs(), "Grace period elapsed, dropping open connections");
            Ok(())
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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
}
