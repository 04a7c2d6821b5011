use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection-level failure before a response was received.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status. `message` is the
    /// upstream error text, or "Unknown error" when the body carried none.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The store answered successfully but the body was not what the
    /// operation expects (e.g. a non-boolean RPC result).
    #[error("malformed store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Build a `Service` error from an upstream error body. PostgREST error
    /// bodies are `{"message": …, "code": …, …}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());
        StoreError::Service { status, message }
    }
}
