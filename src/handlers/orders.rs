// handlers/orders.rs - /products/order and /products/cart.

use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::extract::ValidJson;
use crate::state::AppState;
use crate::store::collections;

#[derive(Debug, Deserialize)]
pub struct PlaceOrder {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Opaque structured payload; stored as-is.
    pub items: Value,
}

/// POST /products/order - insert one order row.
pub async fn place_order(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<PlaceOrder>,
) -> ApiResult<Json<Value>> {
    state
        .store
        .insert(
            collections::ORDERS,
            json!({ "user_id": payload.user_id, "items": payload.items }),
        )
        .await?;
    Ok(Json(json!({ "success": true, "message": "Order placed!" })))
}

#[derive(Debug, Deserialize)]
pub struct CartAdd {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: i64,
}

/// POST /products/cart - insert one cart row. Repeat adds for the same
/// product are separate rows; there is no merge.
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CartAdd>,
) -> ApiResult<Json<Value>> {
    state
        .store
        .insert(
            collections::CART,
            json!({
                "user_id": payload.user_id,
                "product_id": payload.product_id,
                "quantity": payload.quantity,
            }),
        )
        .await?;
    Ok(Json(json!({ "success": true, "message": "Product added to cart!" })))
}
