#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use storefront_api::auth::{AuthError, AuthProvider, Session};
use storefront_api::store::{SelectQuery, Store, StoreError};
use storefront_api::{app, AppState};

/// In-memory stand-in for the hosted store. Records every call so tests can
/// assert exactly what the router asked for.
#[derive(Default)]
pub struct StubStore {
    /// Rows returned by any `select`.
    pub rows: Vec<Value>,
    /// Outcome of `reserve_stock`.
    pub reserve_outcome: bool,
    /// When set, every call fails with this upstream message.
    pub fail_with: Option<String>,

    pub selects: Mutex<Vec<(String, Vec<(String, String)>)>>,
    pub inserts: Mutex<Vec<(String, Value)>>,
    pub deletes: Mutex<Vec<(String, i64)>>,
    pub updates: Mutex<Vec<(String, i64, Value)>>,
    pub reservations: Mutex<Vec<(i64, i64)>>,
}

impl StubStore {
    fn failure(&self) -> Option<StoreError> {
        self.fail_with
            .as_ref()
            .map(|message| StoreError::Service { status: 500, message: message.clone() })
    }
}

#[async_trait]
impl Store for StubStore {
    async fn select(&self, collection: &str, query: SelectQuery) -> Result<Vec<Value>, StoreError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.selects
            .lock()
            .unwrap()
            .push((collection.to_string(), query.into_params()));
        Ok(self.rows.clone())
    }

    async fn insert(&self, collection: &str, row: Value) -> Result<(), StoreError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.inserts.lock().unwrap().push((collection.to_string(), row));
        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), StoreError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.deletes.lock().unwrap().push((collection.to_string(), id));
        Ok(())
    }

    async fn update_by_id(&self, collection: &str, id: i64, changes: Value) -> Result<(), StoreError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.updates.lock().unwrap().push((collection.to_string(), id, changes));
        Ok(())
    }

    async fn reserve_stock(&self, product_id: i64, quantity: i64) -> Result<bool, StoreError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.reservations.lock().unwrap().push((product_id, quantity));
        Ok(self.reserve_outcome)
    }
}

#[derive(Default)]
pub struct StubAuth {
    /// Token carried by the session `sign_in` returns.
    pub token: Option<String>,
    /// When set, every call fails with this provider message.
    pub fail_with: Option<String>,

    pub signups: Mutex<Vec<(String, String)>>,
    pub logins: Mutex<Vec<(String, String)>>,
}

impl StubAuth {
    fn failure(&self) -> Option<AuthError> {
        self.fail_with
            .as_ref()
            .map(|message| AuthError::Provider { status: 400, message: message.clone() })
    }
}

#[async_trait]
impl AuthProvider for StubAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.signups.lock().unwrap().push((email.to_string(), password.to_string()));
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.logins.lock().unwrap().push((email.to_string(), password.to_string()));
        Ok(Session { access_token: self.token.clone() })
    }
}

/// Build the real router over stub capabilities, keeping handles to the
/// stubs so tests can inspect recorded calls afterwards.
pub fn app_with(store: StubStore, auth: StubAuth) -> (Router, Arc<StubStore>, Arc<StubAuth>) {
    let store = Arc::new(store);
    let auth = Arc::new(auth);
    let router = app(AppState { store: store.clone(), auth: auth.clone() });
    (router, store, auth)
}

pub fn default_app() -> (Router, Arc<StubStore>, Arc<StubAuth>) {
    app_with(StubStore::default(), StubAuth::default())
}

/// Fire one request through the router and decode the JSON response.
pub async fn send(
    router: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => Request::builder().method(method).uri(uri).body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub fn query_param(params: &[(String, String)], key: &str) -> Option<String> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}
