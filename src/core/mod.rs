//! Core library components.

pub mod caddy;
pub mod compose;
pub mod constants;
pub mod derive;
pub mod env;
pub mod generate;
pub mod reconcile;
pub mod store;
pub mod types;
