// handlers/account.rs - /products/signup and /products/login.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::extract::ValidJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// POST /products/signup - register a user with the auth provider.
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(creds): ValidJson<Credentials>,
) -> ApiResult<Json<Value>> {
    state.auth.sign_up(&creds.email, &creds.password).await?;
    Ok(Json(json!({ "success": true, "message": "Signup successful!" })))
}

/// POST /products/login - exchange credentials for a bearer token. The
/// `token` field is omitted when the provider issues no session token.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(creds): ValidJson<Credentials>,
) -> ApiResult<Json<Value>> {
    let session = state.auth.sign_in(&creds.email, &creds.password).await?;

    let mut body = json!({ "success": true });
    if let Some(token) = session.access_token {
        body["token"] = Value::String(token);
    }
    Ok(Json(body))
}
