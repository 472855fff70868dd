//! HTTP handler modules.
//! Used by: server.

pub mod health;
pub mod hello;
pub mod inventory;
pub mod metrics;
pub mod orders;
pub mod users;
