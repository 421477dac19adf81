//! blueBox Core - Shared domain types.
//!
//! This crate provides the closed-set and newtype values used by the admin
//! dashboard:
//! - `UserId` - opaque identifier for user records
//! - `Email` - address with the simple `local@domain.tld` shape
//! - `UserType` / `UserStatus` - closed enumerations, including the status cycle
//! - `JoinDate` - calendar date rendered as `DD Mon YYYY`
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no templates. The admin crate owns all state and presentation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
