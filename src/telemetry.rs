//! Metrics tracking.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub hello_served: AtomicU64,
    pub tracking_failures: AtomicU64,
    pub users_created: AtomicU64,
    pub orders_created: AtomicU64,
    pub inventory_updates: AtomicU64,
    pub upstream_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            hello_served: AtomicU64::new(0),
            tracking_failures: AtomicU64::new(0),
            users_created: AtomicU64::new(0),
            orders_created: AtomicU64::new(0),
            inventory_updates: AtomicU64::new(0),
            upstream_failures: AtomicU64::new(0),
        }
    }

    pub fn record_hello(&self) {
        self.hello_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tracking_failure(&self) {
        self.tracking_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_user_created(&self) {
        self.users_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_order_created(&self) {
        self.orders_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_inventory_update(&self) {
        self.inventory_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_failure(&self) {
        self.upstream_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            hello_served: self.hello_served.load(Ordering::Relaxed),
            tracking_failures: self.tracking_failures.load(Ordering::Relaxed),
            users_created: self.users_created.load(Ordering::Relaxed),
            orders_created: self.orders_created.load(Ordering::Relaxed),
            inventory_updates: self.inventory_updates.load(Ordering::Relaxed),
            upstream_failures: self.upstream_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub hello_served: u64,
    pub tracking_failures: u64,
    pub users_created: u64,
    pub orders_created: u64,
    pub inventory_updates: u64,
    pub upstream_failures: u64,
}
