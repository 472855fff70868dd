//! In-memory domain stores.
//! Used by: handlers, state.

pub mod inventory;
pub mod orders;
pub mod users;
