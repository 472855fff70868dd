//! In-memory user store with seed data.
//! Used by: handlers::users, state.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{lock_err, Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

pub struct UserStore {
    users: Mutex<HashMap<String, User>>,
}

impl UserStore {
    pub fn with_seed_data() -> Self {
        let users = [
            User {
                id: "user-1".into(),
                name: "Alice Johnson".into(),
                email: "alice@example.com".into(),
            },
            User {
                id: "user-2".into(),
                name: "Bob Smith".into(),
                email: "bob@example.com".into(),
            },
        ];
        Self {
            users: Mutex::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
        }
    }

    pub fn list(&self) -> Result<Vec<User>> {
        let users = self.users.lock().map_err(lock_err("user"))?;
        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    pub fn get(&self, id: &str) -> Result<User> {
        let users = self.users.lock().map_err(lock_err("user"))?;
        users.get(id).cloned().ok_or(Error::NotFound("user"))
    }

    pub fn create(&self, name: String, email: String) -> Result<User> {
        let id = format!("user-{}", &Uuid::new_v4().to_string()[..8]);
        let user = User { id: id.clone(), name, email };
        let mut users = self.users.lock().map_err(lock_err("user"))?;
        users.insert(id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_has_two_users() -> Result<()> {
        let store = UserStore::with_seed_data();
        assert_eq!(store.list()?.len(), 2);
        Ok(())
    }

    #[test]
    fn get_returns_seeded_user() -> Result<()> {
        let store = UserStore::with_seed_data();
        let user = store.get("user-1")?;
        assert_eq!(user.name, "Alice Johnson");
        assert_eq!(user.email, "alice@example.com");
        Ok(())
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = UserStore::with_seed_data();
        let result = store.get("user-999");
        assert!(matches!(result, Err(Error::NotFound("user"))));
    }

    #[test]
    fn created_user_is_retrievable() -> Result<()> {
        let store = UserStore::with_seed_data();
        let created = store.create("Carol Diaz".into(), "carol@example.com".into())?;
        let fetched = store.get(&created.id)?;
        assert_eq!(fetched.name, "Carol Diaz");
        assert_eq!(store.list()?.len(), 3);
        Ok(())
    }

    #[test]
    fn created_users_get_distinct_ids() -> Result<()> {
        let store = UserStore::with_seed_data();
        let a = store.create("A".into(), "a@example.com".into())?;
        let b = store.create("B".into(), "b@example.com".into())?;
        assert_ne!(a.id, b.id);
        Ok(())
    }
}
