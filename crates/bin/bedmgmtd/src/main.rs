//! # bedmgmtd — bed management daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise `tracing` from the configured filter
//! - Construct the OpenMRS backend client (adapter)
//! - Construct application services, injecting the backend via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT), cancelling in-flight page renders
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bedmgmt_adapter_http_axum::state::AppState;
use bedmgmt_adapter_openmrs::OpenmrsClient;
use bedmgmt_app::services::bed_service::BedService;
use bedmgmt_app::services::bed_type_loader::BedTypeLoader;
use bedmgmt_app::services::ward_bed_service::WardBedService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Backend
    let backend = Arc::new(
        OpenmrsClient::new(&config.backend.openmrs()).context("failed to build backend client")?,
    );

    // Services
    let bed_service = BedService::new(Arc::clone(&backend));
    let bed_type_loader = BedTypeLoader::new(Arc::clone(&backend));
    let ward_bed_service = WardBedService::new(
        Arc::clone(&backend),
        config.backend.ward_tag,
        config.listing.ward_failure_policy,
    );

    // HTTP
    let shutdown = CancellationToken::new();
    let state = AppState::new(bed_service, bed_type_loader, ward_bed_service)
        .with_shutdown(shutdown.clone())
        .with_default_page_size(config.listing.default_page_size);
    let app = bedmgmt_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        %bind_addr,
        backend = %backend.api_root(),
        ward_tag = %config.backend.ward_tag,
        "bedmgmtd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .context("server error")?;

    tracing::info!("bedmgmtd stopped");
    Ok(())
}

/// Resolve on Ctrl-C and cancel every in-flight page render.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown requested");
    shutdown.cancel();
}
