//! Deterministic, pure logic shared by the gateway.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod alias;
pub mod splice;
pub mod tree;
pub mod types;
