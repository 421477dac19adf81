//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use bluebox_core::EmailError;

use crate::config::AdminConfig;
use crate::db::{UserRegistry, demo_users};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The user registry sits behind
/// an async `RwLock`: page renders share it, mutations hold the write lock
/// only for the synchronous registry call.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    registry: RwLock<UserRegistry>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Seeds the registry with the sample users when
    /// [`AdminConfig::seed_demo_users`] is set.
    ///
    /// # Errors
    ///
    /// Returns an error if a sample user record is invalid.
    pub fn new(config: AdminConfig) -> Result<Self, EmailError> {
        let registry = if config.seed_demo_users {
            UserRegistry::from_users(demo_users()?)
        } else {
            UserRegistry::new()
        };

        Ok(Self::with_registry(config, registry))
    }

    /// Create application state around an existing registry.
    #[must_use]
    pub fn with_registry(config: AdminConfig, registry: UserRegistry) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                registry: RwLock::new(registry),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the user registry lock.
    #[must_use]
    pub fn registry(&self) -> &RwLock<UserRegistry> {
        &self.inner.registry
    }
}
