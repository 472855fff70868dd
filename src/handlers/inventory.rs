//! Inventory endpoints.
//! Used by: server.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::state::AppState;
use crate::store::inventory::InventoryItem;

#[derive(Deserialize)]
pub struct UpdateInventoryRequest {
    pub quantity: u32,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let items = state.inventory.list()?;
    Ok(Json(json!({ "inventory": items })))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>> {
    Ok(Json(state.inventory.get(&id)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateInventoryRequest>,
) -> Result<Json<InventoryItem>> {
    let item = state.inventory.update_quantity(&id, req.quantity)?;
    state.metrics.record_inventory_update();
    tracing::info!(id = %item.id, quantity = item.quantity, "inventory updated");
    Ok(Json(item))
}
