// PostgREST-backed implementation of the store capability.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::{json, Value};
use url::Url;

use crate::config::AppConfig;
use crate::store::{SelectQuery, Store, StoreError};

/// Thin client over the hosted project's `/rest/v1` surface. One shared
/// `reqwest::Client`; the service-role credential rides on every call.
pub struct PostgrestStore {
    client: reqwest::Client,
    rest_url: Url,
}

impl PostgrestStore {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.service_role_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        let mut apikey = HeaderValue::from_str(&config.service_role_key)?;
        apikey.set_sensitive(true);
        headers.insert("apikey", apikey);

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        let rest_url = config.supabase_url.join("rest/v1/")?;
        Ok(Self { client, rest_url })
    }

    fn collection_url(&self, collection: &str) -> Result<Url, StoreError> {
        self.rest_url
            .join(collection)
            .map_err(|e| StoreError::Decode(format!("bad collection url: {}", e)))
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::from_response(status, &body))
    }
}

#[async_trait]
impl Store for PostgrestStore {
    async fn select(&self, collection: &str, query: SelectQuery) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(self.collection_url(collection)?)
            .query(&query.into_params())
            .send()
            .await?;
        let rows = self.check(response).await?.json::<Vec<Value>>().await?;
        Ok(rows)
    }

    async fn insert(&self, collection: &str, row: Value) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.collection_url(collection)?)
            .header("Prefer", "return=minimal")
            .json(&json!([row]))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.collection_url(collection)?)
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn update_by_id(&self, collection: &str, id: i64, changes: Value) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.collection_url(collection)?)
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=minimal")
            .json(&changes)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn reserve_stock(&self, product_id: i64, quantity: i64) -> Result<bool, StoreError> {
        // Single conditional decrement, executed server-side:
        //   create function reserve_stock(p_product_id bigint, p_quantity bigint)
        //   returns boolean ... update products set quantity = quantity - p_quantity
        //   where id = p_product_id and quantity >= p_quantity ...
        let response = self
            .client
            .post(self.rest_url.join("rpc/reserve_stock").map_err(|e| {
                StoreError::Decode(format!("bad rpc url: {}", e))
            })?)
            .json(&json!({ "p_product_id": product_id, "p_quantity": quantity }))
            .send()
            .await?;
        let body = self.check(response).await?.text().await?;
        serde_json::from_str::<bool>(body.trim())
            .map_err(|_| StoreError::Decode(format!("expected boolean rpc result, got: {}", body)))
    }
}
