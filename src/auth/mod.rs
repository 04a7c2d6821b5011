pub mod gotrue;

pub use gotrue::GotrueAuth;

use async_trait::async_trait;
use thiserror::Error;

/// Opaque session returned by successful authentication. The provider may
/// issue a session without a token (e.g. email confirmation pending).
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub access_token: Option<String>,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The provider rejected the call. `message` is its error text, or
    /// "Unknown error" when the body carried none.
    #[error("{message}")]
    Provider { status: u16, message: String },
}

impl AuthError {
    /// GoTrue error bodies vary by endpoint: `error_description`, `msg`,
    /// or `error`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["error_description", "msg", "error"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| "Unknown error".to_string());
        AuthError::Provider { status, message }
    }
}

/// Auth capability: credential registration and password-grant session
/// issuance. Credentials are passed through, never stored or inspected.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}
