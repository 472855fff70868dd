//! The hello endpoint: fires one tracking call and returns a fixed greeting.
//! The tracking result is deliberately discarded; its failure never affects
//! the response.
//! Used by: server.

use axum::extract::State;

use crate::state::AppState;

pub async fn hello(State(state): State<AppState>) -> &'static str {
    state.metrics.record_hello();
    if let Err(err) = state.tracking.fire("/track").await {
        state.metrics.record_tracking_failure();
        tracing::warn!(error = %err, "tracking call failed");
    }
    "Hello World"
}
