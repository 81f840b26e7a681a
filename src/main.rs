// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::dashboard_service::DashboardService;
use crate::application::export_service::ExportService;
use crate::application::request_service::RequestService;
use crate::infrastructure::config::{load_server_config, load_store_config};
use crate::infrastructure::store_client::StoreClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    export_csv, export_jpg, export_png, get_catalog, get_chart, get_dashboard, health_check,
    refresh, submit_request, toggle_pin, update_settings,
};
use crate::presentation::redirect::canonical_host_redirect;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let store_config = load_store_config()?;
    let server_config = load_server_config()?;

    let fetch_timeout = Duration::from_secs(store_config.store.fetch_timeout_secs);

    // Create repository (infrastructure layer)
    let repository = Arc::new(StoreClient::new(
        store_config.store.url,
        store_config.store.api_key,
        store_config.store.series_table,
        store_config.store.requests_table,
        fetch_timeout,
    ));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository.clone(), fetch_timeout);

    // Load every catalog series before accepting traffic
    dashboard_service.load_all().await;

    let state = Arc::new(AppState {
        dashboard_service,
        export_service: ExportService::new(),
        request_service: RequestService::new(repository),
    });

    // Build router (presentation layer)
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .route("/catalog", get(get_catalog))
        .route("/dashboard", get(get_dashboard))
        .route("/series/:id/chart", get(get_chart))
        .route("/series/:id/settings", put(update_settings))
        .route("/series/:id/pin", post(toggle_pin))
        .route("/series/:id/export/csv", get(export_csv))
        .route("/series/:id/export/png", get(export_png))
        .route("/series/:id/export/jpg", get(export_jpg))
        .route("/requests", post(submit_request))
        .route("/refresh", post(refresh))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if let Some(redirect) = server_config.server.redirect {
        router = router.layer(middleware::from_fn_with_state(
            redirect,
            canonical_host_redirect,
        ));
    }

    // Start server
    let addr: SocketAddr = server_config
        .server
        .listen
        .parse()
        .context("Invalid listen address")?;
    tracing::info!("Starting fred-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
