//! HTTP server lifecycle: bind, serve, shut down on signal

use axum::Router;
use inkpost_core::errors::{ExError, ExErrorKind};

use crate::configuration::Settings;
use crate::error::AppError;
use crate::routes::router;
use crate::state::AppState;

/// The blog server.
pub struct Server {
    settings: Settings,
    state: AppState,
}

impl Server {
    /// Prepare the server: open and migrate the database, load templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the database or templates cannot be prepared.
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let state = AppState::from_settings(&settings)?;
        Ok(Self { settings, state })
    }

    /// The application router, without binding a socket.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or serving fails.
    pub async fn run(self) -> Result<(), AppError> {
        let addr = self.settings.server.addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| io_error("bind", e))?;

        tracing::info!(
            %addr,
            database = %self.settings.database.path.display(),
            "Starting Inkpost server"
        );
        eprintln!("Listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| io_error("serve", e))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully");
        },
    }
}

fn io_error(op: &str, err: std::io::Error) -> AppError {
    AppError(
        ExError::new(ExErrorKind::Io)
            .with_op(op)
            .with_message(err.to_string()),
    )
}
