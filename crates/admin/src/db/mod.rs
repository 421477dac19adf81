//! Storage for admin.
//!
//! # Storage: in-memory only
//!
//! The user registry lives in process memory for the lifetime of the server.
//! There is no database and nothing survives a restart.
//!
//! ## Collections
//!
//! - `users` - managed user records, in insertion order

pub mod users;

pub use users::{UserRegistry, demo_users};
