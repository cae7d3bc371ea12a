//! Application startup and lifecycle management.
//!
//! Builds the provider from configuration, binds the listener and serves the
//! router until a shutdown signal arrives.

use crate::config::{default_index_path, NotesConfig};
use crate::handlers::{generate_notes, health_check, list_models, metrics::metrics};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::{GenerationParams, TextProvider};
use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_request_span, request_id_middleware};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub text_provider: Arc<dyn TextProvider>,
    pub generation_params: GenerationParams,
    pub index_path: PathBuf,
}

impl AppState {
    pub fn new(text_provider: Arc<dyn TextProvider>) -> Self {
        Self {
            text_provider,
            generation_params: GenerationParams::default(),
            index_path: default_index_path(),
        }
    }

    pub fn with_generation_params(mut self, params: GenerationParams) -> Self {
        self.generation_params = params;
        self
    }

    pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_path = path.into();
        self
    }

    /// Build state for production from the loaded configuration.
    pub fn from_config(config: &NotesConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
            api_base: config.google.api_base.clone(),
        };
        let text_provider = GeminiTextProvider::new(gemini_config)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Ok(Self::new(Arc::new(text_provider))
            .with_generation_params(GenerationParams {
                temperature: config.generation.temperature,
                top_p: config.generation.top_p,
                max_tokens: config.generation.max_output_tokens,
            })
            .with_index_path(config.assets.index_path.clone()))
    }
}

/// Build the HTTP router.
pub fn build_router(state: AppState) -> Router {
    let index = ServeFile::new(&state.index_path);

    Router::new()
        .route_service("/", index)
        .route("/generate-notes", post(generate_notes))
        .route("/list-models", get(list_models))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http().make_span_with(http_request_span::<Body>))
        // Outermost, so the trace span sees the request id.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: NotesConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config)?;
        Self::build_with_state(state, config.common.port).await
    }

    /// Build around an existing state (port 0 = random port for testing).
    pub async fn build_with_state(state: AppState, port: u16) -> Result<Self, AppError> {
        if !state.index_path.is_file() {
            tracing::warn!(
                path = %state.index_path.display(),
                "Index page not found; GET / will return 404"
            );
        }

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server listening at http://localhost:{}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
