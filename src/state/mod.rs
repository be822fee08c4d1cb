//! Data-owning application state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`todos`, `theme`) so components can depend on
//! small focused stores. The two stores are independent: they share nothing
//! beyond the storage medium, under distinct keys.

pub mod observers;
pub mod theme;
pub mod todos;
