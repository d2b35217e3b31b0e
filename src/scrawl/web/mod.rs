//! # Web Layer
//!
//! The HTTP client of the [`api`](crate::api). Like the CLI, it only translates:
//! form fields and path segments in, HTML, plain text and redirects out.
//!
//! Storage is plain blocking `std::fs`, so every API call is shipped to tokio's
//! blocking pool through [`AppState::with_api`].

use crate::api::ScrawlApi;
use crate::config::ScrawlConfig;
use crate::error::{Result, ScrawlError};
use crate::store::fs::FileStore;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod templates;

use templates::Templates;

#[derive(Clone)]
pub struct AppState {
    api: Arc<ScrawlApi<FileStore>>,
    templates: Arc<Templates>,
}

impl AppState {
    pub fn new(api: ScrawlApi<FileStore>) -> Result<Self> {
        Ok(Self {
            api: Arc::new(api),
            templates: Arc::new(Templates::new()?),
        })
    }

    /// Run a (blocking) API call off the async executor.
    pub async fn with_api<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ScrawlApi<FileStore>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let api = Arc::clone(&self.api);
        tokio::task::spawn_blocking(move || f(&api))
            .await
            .map_err(|e| ScrawlError::Task(e.to_string()))?
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Listing and assets
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::stylesheet))
        .route("/count_files", get(handlers::count_files))
        // Submissions
        .route("/submit_text", post(handlers::submit_text))
        .route("/submit_link", post(handlers::submit_link))
        .route(
            "/submit_file",
            post(handlers::submit_file).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        // Print preview
        .route("/print", get(handlers::print_page))
        .route("/darkprint", get(handlers::darkprint_page))
        .route("/print_text", post(handlers::print_text))
        .route("/darkprint_text", post(handlers::darkprint_text))
        .route("/render", post(handlers::render_posted))
        // Per-item routes
        .route("/render/{id}", get(handlers::render_light))
        .route("/render_dark/{id}", get(handlers::render_dark))
        .route("/view/{id}", get(handlers::view))
        .route("/download/{id}", get(handlers::download))
        .route("/delete/{id}", get(handlers::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the app for `config` and serve it until ctrl-c.
pub async fn serve(config: &ScrawlConfig) -> Result<()> {
    let store = FileStore::new(&config.data_dir);
    store.ensure_root()?;

    let state = AppState::new(ScrawlApi::new(store))?;
    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        data_dir = %config.data_dir.display(),
        "scrawl listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("scrawl stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}
