mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use crate::services::record_store::RecordStore;
use crate::services::webhook::WebhookForwarder;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env();

    // Forwarding is optional: saves still land on disk without it.
    let forwarder = match WebhookForwarder::from_config(config.lung_report_webhook_url.as_deref(), config.webhook_timeouts)
    {
        Ok(Some(forwarder)) => {
            tracing::info!(url = forwarder.url(), "lung-report webhook enabled");
            Some(forwarder.into_shared())
        }
        Ok(None) => {
            tracing::warn!("LUNG_REPORT_WEBHOOK_URL is empty; webhook forwarding disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "webhook client not available; webhook forwarding disabled");
            None
        }
    };

    let store = RecordStore::new(config.records_dir.clone());
    tracing::info!(dir = %store.root().display(), "record store ready");
    let state = state::AppState::new(store, forwarder);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site unavailable; serving API routes only");
            routes::app(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lungstage listening");
    axum::serve(listener, app).await.expect("server failed");
}
