// GoTrue-backed implementation of the auth capability.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::auth::{AuthError, AuthProvider, Session};
use crate::config::AppConfig;

pub struct GotrueAuth {
    client: reqwest::Client,
    auth_url: Url,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

impl GotrueAuth {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let mut apikey = HeaderValue::from_str(&config.service_role_key)?;
        apikey.set_sensitive(true);
        headers.insert("apikey", apikey);

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        let auth_url = config.supabase_url.join("auth/v1/")?;
        Ok(Self { client, auth_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        // Joining a static path onto a validated base cannot fail, but the
        // error is mapped rather than unwrapped to keep the handler path
        // panic-free.
        self.auth_url.join(path).map_err(|_| AuthError::Provider {
            status: 500,
            message: "Unknown error".to_string(),
        })
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, AuthError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(AuthError::from_response(status, &body))
    }
}

#[async_trait]
impl AuthProvider for GotrueAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("signup")?)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(self.endpoint("token")?)
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let token = self.check(response).await?.json::<TokenResponse>().await?;
        Ok(Session { access_token: token.access_token })
    }
}
