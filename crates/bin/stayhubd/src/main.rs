//! # stayhubd — stayhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Construct the filesystem stores (adapters)
//! - Construct application services, injecting stores via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use stayhub_adapter_http_axum::state::AppState;
use stayhub_adapter_storage_fs::{FsMediaStore, JsonHotelStore};
use stayhub_app::services::catalog_service::CatalogService;
use stayhub_app::services::gallery_service::GalleryService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Stores — both document store handles point at the same file.
    let catalog_store = JsonHotelStore::new(config.data_file());
    let gallery_store = catalog_store.clone();
    let media_store = FsMediaStore::new(config.uploads_dir());

    // Services
    let catalog = CatalogService::new(catalog_store);
    let gallery = GalleryService::new(gallery_store, media_store);

    // HTTP
    let state = AppState::new(catalog, gallery);
    let app = stayhub_adapter_http_axum::router::build(state, config.uploads_dir());

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "stayhubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
