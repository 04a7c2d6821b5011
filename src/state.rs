use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::store::Store;

/// Capability bundle handed to the router at startup.
///
/// Both handles are constructed once in `main` and shared read-only across
/// concurrent requests; no handler mutates them.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub auth: Arc<dyn AuthProvider>,
}
