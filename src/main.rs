use std::sync::Arc;

use anyhow::Context;

use storefront_api::auth::GotrueAuth;
use storefront_api::config::AppConfig;
use storefront_api::store::PostgrestStore;
use storefront_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SUPABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storefront_api=info,tower_http=info")),
        )
        .init();

    // Missing store endpoint or credential is fatal here, never per-request.
    let config = AppConfig::from_env()?;

    let state = AppState {
        store: Arc::new(PostgrestStore::new(&config)?),
        auth: Arc::new(GotrueAuth::new(&config)?),
    };

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("storefront-api listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")
}
