use std::{future::Future, future::IntoFuture, sync::Arc, time::Duration};

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build the app on fresh in-memory stores and serve until a
/// termination signal.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let app: Router = routes::build_router(state, build_cors(), config.server.request_timeout());

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "starting catalog server");

    serve(listener, app, config.server.shutdown_grace(), shutdown_signal()).await
}

/// Serve `app` until `signal` resolves, then stop accepting connections and
/// give in-flight requests up to `grace` to finish.
///
/// Connections still open after the grace period are left to the runtime,
/// which drops them when it shuts down.
pub async fn serve<F>(listener: TcpListener, app: Router, grace: Duration, signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let trigger = Arc::clone(&draining);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            trigger.notify_one();
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        res = &mut server => res?,
        _ = draining.notified() => {
            info!(grace_ms = grace.as_millis() as u64, "shutdown initiated, draining in-flight requests");
            match tokio::time::timeout(grace, &mut server).await {
                Ok(res) => res?,
                Err(_) => warn!("grace period elapsed, abandoning remaining connections"),
            }
        }
    }
    info!("server stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "SIGINT", "received termination signal"),
        _ = terminate => info!(signal = "SIGTERM", "received termination signal"),
    }
}
