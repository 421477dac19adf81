//! Core types for blueBox.
//!
//! This module provides type-safe wrappers for the user-management domain.

pub mod date;
pub mod email;
pub mod id;
pub mod status;

pub use date::JoinDate;
pub use email::{Email, EmailError};
pub use id::*;
pub use status::*;
