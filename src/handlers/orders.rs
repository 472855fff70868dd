//! Order endpoints.
//! Used by: server.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::store::orders::Order;

#[derive(Deserialize)]
pub struct ListParams {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
}

fn validate_create(req: &CreateOrderRequest) -> Result<()> {
    if req.user_id.trim().is_empty() {
        return Err(Error::Validation("user_id is required".into()));
    }
    if req.product_id.trim().is_empty() {
        return Err(Error::Validation("product_id is required".into()));
    }
    if req.quantity < 1 {
        return Err(Error::Validation("quantity must be at least 1".into()));
    }
    Ok(())
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>> {
    let orders = match params.user_id.as_deref() {
        Some(user_id) if !user_id.is_empty() => state.orders.list_by_user(user_id)?,
        _ => state.orders.list()?,
    };
    Ok(Json(json!({ "orders": orders })))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    Ok(Json(state.orders.get(&id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    validate_create(&req)?;
    let order = state.orders.create(req.user_id, req.product_id, req.quantity)?;
    state.metrics.record_order_created();
    tracing::info!(id = %order.id, user_id = %order.user_id, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}
