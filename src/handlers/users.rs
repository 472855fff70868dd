//! User endpoints, including the cross-service dashboard fan-out.
//! Used by: server.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::store::users::User;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

fn validate_create(req: &CreateUserRequest) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(Error::Validation("name is required".into()));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(Error::Validation("a valid email is required".into()));
    }
    Ok(())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let users = state.users.list()?;
    Ok(Json(json!({ "users": users })))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    Ok(Json(state.users.get(&id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    validate_create(&req)?;
    let user = state.users.create(req.name, req.email)?;
    state.metrics.record_user_created();
    tracing::info!(id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Aggregates the user's orders and the full inventory from the upstream
/// services. Both calls run in parallel; a failed call yields `null` for
/// that section rather than failing the whole response.
pub async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let user = state.users.get(&id)?;

    let orders_path = format!("/v1/orders?user_id={}", user.id);
    let (orders, inventory) = tokio::join!(
        state.order_client.get_json(&orders_path),
        state.inventory_client.get_json("/v1/inventory"),
    );

    Ok(Json(json!({
        "user": user,
        "orders": partial(&state, "order", orders),
        "inventory": partial(&state, "inventory", inventory),
    })))
}

fn partial(state: &AppState, upstream: &str, result: Result<Value>) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            state.metrics.record_upstream_failure();
            tracing::warn!(upstream, error = %err, "upstream call failed");
            None
        }
    }
}
