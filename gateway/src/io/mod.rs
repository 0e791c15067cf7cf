//! Side-effecting adapters: filesystem stores, configuration, host details.

pub mod config;
pub mod dir_store;
pub mod file_store;
pub mod host;
