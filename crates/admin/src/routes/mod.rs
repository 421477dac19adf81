//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (mounted in `app`)
//!
//! # Dashboard
//! GET  /                       - Dashboard with the user table and modal
//!
//! # Users
//! POST /users/new              - Open the modal for a new user
//! POST /users/{id}/edit        - Open the modal for an existing user
//! POST /users/{id}/status      - Advance a user's status
//! POST /users/form             - Submit the modal
//! POST /users/form/cancel      - Close the modal
//! ```

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod dashboard;
pub mod users;

/// Build all page and form routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .merge(users::router())
}
