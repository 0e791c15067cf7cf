//! Kernel I/O gateway: one entry point for alias-aware file and directory
//! operations.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (request validation, alias
//!   resolution, line splicing, tree rendering). No I/O.
//! - **[`io`]**: Side-effecting adapters (filesystem stores, configuration,
//!   host details).
//!
//! [`router::Gateway`] composes the two and turns every request into a
//! [`core::types::Response`].

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod router;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::alias::AliasTable;
pub use crate::core::types::{Request, Response};
pub use crate::error::{GatewayError, GatewayResult};
pub use crate::router::Gateway;
