use std::env;

use anyhow::Context;
use url::Url;

/// Process-level configuration, read once at startup.
///
/// The store endpoint and service credential are required; the process
/// refuses to start without them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the hosted project (PostgREST and GoTrue live under it).
    pub supabase_url: Url,
    /// Service-role credential, sent as `apikey` and bearer token upstream.
    pub service_role_key: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let supabase_url = Url::parse(&raw_url)
            .with_context(|| format!("SUPABASE_URL is not a valid URL: {}", raw_url))?;

        let service_role_key =
            env::var("SUPABASE_SERVICE_ROLE_KEY").context("SUPABASE_SERVICE_ROLE_KEY must be set")?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8000);

        Ok(Self { supabase_url, service_role_key, port })
    }
}
