// handlers/catalog.rs - /products listing, product management, basket add.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::extract::ValidJson;
use crate::state::AppState;
use crate::store::{collections, SelectQuery};

/// Stock level below which a product counts as low stock.
const LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    /// Presence alone (any value, including empty) enables the filter.
    #[serde(rename = "lowStock")]
    pub low_stock: Option<String>,
}

/// GET /products - list products, newest first, with optional filters.
/// Combined filters intersect.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let mut query = SelectQuery::new().order_desc("created_at");

    if let Some(category) = &params.category {
        query = query.eq("category", category);
    }
    if let Some(search) = &params.search {
        query = query.ilike_contains("name", search);
    }
    if params.low_stock.is_some() {
        query = query.lt("quantity", LOW_STOCK_THRESHOLD);
    }

    let rows = state.store.select(collections::PRODUCTS, query).await?;
    Ok(Json(Value::Array(rows)))
}

/// POST /products carries two body shapes; the storefront one (basket add)
/// takes precedence when a payload happens to satisfy both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductsPost {
    BasketAdd {
        session_id: String,
        product_id: i64,
        quantity: i64,
    },
    Create {
        name: String,
        quantity: i64,
        category: String,
    },
}

/// POST /products - add a product to the basket, or create a product.
pub async fn create_or_basket(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProductsPost>,
) -> ApiResult<Json<Value>> {
    match payload {
        ProductsPost::BasketAdd { session_id, product_id, quantity } => {
            // One conditional decrement against the store; no read-then-write
            // window for concurrent requests to overcommit through.
            let reserved = state.store.reserve_stock(product_id, quantity).await?;
            if !reserved {
                return Err(ApiError::InsufficientStock);
            }

            state
                .store
                .insert(
                    collections::BASKET,
                    json!({
                        "session_id": session_id,
                        "product_id": product_id,
                        "quantity": quantity,
                    }),
                )
                .await?;

            Ok(Json(json!({ "success": true, "message": "Product added to basket!" })))
        }
        ProductsPost::Create { name, quantity, category } => {
            state
                .store
                .insert(
                    collections::PRODUCTS,
                    json!({ "name": name, "quantity": quantity, "category": category }),
                )
                .await?;

            Ok(Json(json!({ "success": true, "message": "Product added!" })))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteProduct {
    pub id: i64,
}

/// DELETE /products - delete a product by id. No existence pre-check; an
/// unknown id still reports success.
pub async fn delete(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<DeleteProduct>,
) -> ApiResult<Json<Value>> {
    state.store.delete_by_id(collections::PRODUCTS, payload.id).await?;
    Ok(Json(json!({ "success": true, "message": "Product deleted!" })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub id: i64,
    pub quantity: i64,
}

/// PATCH /products - update a product's quantity.
pub async fn update(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UpdateProduct>,
) -> ApiResult<Json<Value>> {
    state
        .store
        .update_by_id(collections::PRODUCTS, payload.id, json!({ "quantity": payload.quantity }))
        .await?;
    Ok(Json(json!({ "success": true, "message": "Product updated!" })))
}
