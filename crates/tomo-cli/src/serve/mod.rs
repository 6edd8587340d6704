//! Local web viewer for Mii records.
//!
//! Serves a single-page UI with a searchable gallery, a detail modal and the
//! relationship web chord diagram. The chord diagram is computed here by the
//! shared [`ViewController`]; the page only draws the render data it receives
//! and applies hover styling from the render's interaction style.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - API request/response types (DTOs)
//! - `templates` - HTML/CSS/JS template rendering

mod handlers;
mod models;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use tomo_core::{Config, RecordStore, ViewController};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// Effective configuration.
    pub config: Config,
    /// Where records are read from.
    pub store: RecordStore,
    /// Relationship web state; activation and filtering take the write lock.
    pub controller: RwLock<ViewController>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = RecordStore::from_config(&config.data);
        let controller = RwLock::new(ViewController::new(config.chord.clone()));
        Self {
            config,
            store,
            controller,
        }
    }

    /// URL prefix images are fetched from.
    ///
    /// Local data is served by this process under the asset prefix; remote
    /// data is linked directly.
    pub fn asset_base(&self) -> String {
        if self.config.data.is_remote() {
            self.config.data.data_dir.trim_end_matches('/').to_string()
        } else {
            self.config.server.asset_prefix.clone()
        }
    }
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the viewer server.
pub struct ServeConfig {
    /// Port to listen on.
    pub port: u16,
    /// Whether to open the browser automatically.
    pub open_browser: bool,
    /// Everything else.
    pub config: Config,
}

impl From<Config> for ServeConfig {
    fn from(config: Config) -> Self {
        Self {
            port: config.server.port,
            open_browser: config.server.open_browser,
            config,
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Build the viewer's router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        // Main page
        .route("/", get(handlers::index))
        // Gallery and detail
        .route("/api/miis", get(handlers::api_miis))
        .route("/api/miis/{index}", get(handlers::api_mii))
        .route("/api/personalities", get(handlers::api_personalities))
        // Relationship web
        .route("/api/web", get(handlers::api_web))
        .route("/api/web/activate", post(handlers::api_web_activate))
        .route("/api/web/filter", post(handlers::api_web_filter));

    // Face and body images straight from the data directory
    if !state.config.data.is_remote() {
        let prefix = state.config.server.asset_prefix.trim_end_matches('/');
        if !prefix.is_empty() {
            app = app.nest_service(prefix, ServeDir::new(&state.config.data.data_dir));
        }
    }

    app.layer(CorsLayer::new().allow_origin(Any)).with_state(state)
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Start the viewer server.
pub async fn start_server(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(config.config));

    // Fail early on a missing or unreadable summary index
    let summaries = state.store.summaries().await?;
    tracing::info!(
        count = summaries.len(),
        data_dir = %state.config.data.data_dir,
        "Found Mii records"
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let url = format!("http://localhost:{}", config.port);

    println!("Starting Tomo viewer...");
    println!("Miis: {}", summaries.len());
    println!("Viewer: {}", url);
    println!("Press Ctrl+C to stop\n");

    // Open browser if requested
    if config.open_browser {
        if let Err(e) = open::that(&url) {
            eprintln!("Could not open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
