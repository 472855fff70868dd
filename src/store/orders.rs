//! In-memory order store with seed data.
//! Used by: handlers::orders, state.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{lock_err, Error, Result};

// Placeholder unit price until a pricing source exists.
const UNIT_PRICE: f64 = 29.99;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub total: f64,
    pub status: String,
}

pub struct OrderStore {
    orders: Mutex<HashMap<String, Order>>,
}

impl OrderStore {
    pub fn with_seed_data() -> Self {
        let orders = [
            Order {
                id: "ord-001".into(),
                user_id: "user-1".into(),
                product_id: "prod-101".into(),
                quantity: 2,
                total: 59.98,
                status: "completed".into(),
            },
            Order {
                id: "ord-002".into(),
                user_id: "user-1".into(),
                product_id: "prod-102".into(),
                quantity: 1,
                total: 149.99,
                status: "pending".into(),
            },
            Order {
                id: "ord-003".into(),
                user_id: "user-2".into(),
                product_id: "prod-101".into(),
                quantity: 5,
                total: 149.95,
                status: "shipped".into(),
            },
        ];
        Self {
            orders: Mutex::new(orders.into_iter().map(|o| (o.id.clone(), o)).collect()),
        }
    }

    pub fn list(&self) -> Result<Vec<Order>> {
        let orders = self.orders.lock().map_err(lock_err("order"))?;
        let mut result: Vec<Order> = orders.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    pub fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>> {
        let orders = self.orders.lock().map_err(lock_err("order"))?;
        let mut result: Vec<Order> = orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    pub fn get(&self, id: &str) -> Result<Order> {
        let orders = self.orders.lock().map_err(lock_err("order"))?;
        orders.get(id).cloned().ok_or(Error::NotFound("order"))
    }

    pub fn create(&self, user_id: String, product_id: String, quantity: u32) -> Result<Order> {
        let id = format!("ord-{}", &Uuid::new_v4().to_string()[..8]);
        let order = Order {
            id: id.clone(),
            user_id,
            product_id,
            quantity,
            total: f64::from(quantity) * UNIT_PRICE,
            status: "pending".into(),
        };
        let mut orders = self.orders.lock().map_err(lock_err("order"))?;
        orders.insert(id, order.clone());
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_has_three_orders() -> Result<()> {
        let store = OrderStore::with_seed_data();
        assert_eq!(store.list()?.len(), 3);
        Ok(())
    }

    #[test]
    fn list_by_user_filters() -> Result<()> {
        let store = OrderStore::with_seed_data();
        let orders = store.list_by_user("user-1")?;
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.user_id == "user-1"));
        Ok(())
    }

    #[test]
    fn list_by_unknown_user_is_empty() -> Result<()> {
        let store = OrderStore::with_seed_data();
        assert!(store.list_by_user("user-999")?.is_empty());
        Ok(())
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = OrderStore::with_seed_data();
        assert!(matches!(store.get("ord-999"), Err(Error::NotFound("order"))));
    }

    #[test]
    fn created_order_starts_pending_with_computed_total() -> Result<()> {
        let store = OrderStore::with_seed_data();
        let order = store.create("user-2".into(), "prod-103".into(), 3)?;
        assert_eq!(order.status, "pending");
        assert!((order.total - 89.97).abs() < 1e-9);
        assert_eq!(store.get(&order.id)?.quantity, 3);
        Ok(())
    }
}
