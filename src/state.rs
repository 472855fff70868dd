//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::client::HttpClient;
use crate::config::Config;
use crate::error::Result;
use crate::store::inventory::InventoryStore;
use crate::store::orders::OrderStore;
use crate::store::users::UserStore;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub users: UserStore,
    pub orders: OrderStore,
    pub inventory: InventoryStore,
    pub order_client: HttpClient,
    pub inventory_client: HttpClient,
    pub tracking: HttpClient,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: &Config) -> Result<AppState> {
    Ok(Arc::new(AppStateInner {
        users: UserStore::with_seed_data(),
        orders: OrderStore::with_seed_data(),
        inventory: InventoryStore::with_seed_data(),
        order_client: HttpClient::new(&config.order_service_url, config.upstream_timeout)?,
        inventory_client: HttpClient::new(&config.inventory_service_url, config.upstream_timeout)?,
        tracking: HttpClient::new(&config.tracking_url, config.upstream_timeout)?,
        metrics: Metrics::new(),
    }))
}

/// State wired to unroutable upstreams with a short timeout, so failure
/// paths resolve quickly in tests.
pub fn build_test_state() -> Result<AppState> {
    build_state(&Config {
        bind_addr: "127.0.0.1:0".into(),
        order_service_url: "http://127.0.0.1:1".into(),
        inventory_service_url: "http://127.0.0.1:1".into(),
        tracking_url: "http://127.0.0.1:1".into(),
        upstream_timeout: Duration::from_millis(200),
    })
}
