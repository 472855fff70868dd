//! In-memory inventory store with seed data.
//! Used by: handlers::inventory, state.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{lock_err, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub product_name: String,
    pub sku: String,
    pub quantity: u32,
    pub price: f64,
}

pub struct InventoryStore {
    items: Mutex<HashMap<String, InventoryItem>>,
}

impl InventoryStore {
    pub fn with_seed_data() -> Self {
        let items = [
            InventoryItem {
                id: "prod-101".into(),
                product_name: "Wireless Mouse".into(),
                sku: "WM-001".into(),
                quantity: 150,
                price: 29.99,
            },
            InventoryItem {
                id: "prod-102".into(),
                product_name: "Mechanical Keyboard".into(),
                sku: "MK-001".into(),
                quantity: 75,
                price: 149.99,
            },
            InventoryItem {
                id: "prod-103".into(),
                product_name: "USB-C Hub".into(),
                sku: "UH-001".into(),
                quantity: 200,
                price: 49.99,
            },
        ];
        Self {
            items: Mutex::new(items.into_iter().map(|i| (i.id.clone(), i)).collect()),
        }
    }

    pub fn list(&self) -> Result<Vec<InventoryItem>> {
        let items = self.items.lock().map_err(lock_err("inventory"))?;
        let mut result: Vec<InventoryItem> = items.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    pub fn get(&self, id: &str) -> Result<InventoryItem> {
        let items = self.items.lock().map_err(lock_err("inventory"))?;
        items.get(id).cloned().ok_or(Error::NotFound("item"))
    }

    pub fn update_quantity(&self, id: &str, quantity: u32) -> Result<InventoryItem> {
        let mut items = self.items.lock().map_err(lock_err("inventory"))?;
        let item = items.get_mut(id).ok_or(Error::NotFound("item"))?;
        item.quantity = quantity;
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_has_three_items() -> Result<()> {
        let store = InventoryStore::with_seed_data();
        assert_eq!(store.list()?.len(), 3);
        Ok(())
    }

    #[test]
    fn get_returns_seeded_item() -> Result<()> {
        let store = InventoryStore::with_seed_data();
        let item = store.get("prod-102")?;
        assert_eq!(item.product_name, "Mechanical Keyboard");
        assert_eq!(item.sku, "MK-001");
        Ok(())
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = InventoryStore::with_seed_data();
        assert!(matches!(store.get("prod-999"), Err(Error::NotFound("item"))));
    }

    #[test]
    fn update_quantity_persists() -> Result<()> {
        let store = InventoryStore::with_seed_data();
        let updated = store.update_quantity("prod-101", 42)?;
        assert_eq!(updated.quantity, 42);
        assert_eq!(store.get("prod-101")?.quantity, 42);
        Ok(())
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = InventoryStore::with_seed_data();
        let result = store.update_quantity("prod-999", 1);
        assert!(matches!(result, Err(Error::NotFound("item"))));
    }
}
