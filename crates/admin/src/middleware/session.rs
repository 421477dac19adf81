//! Session middleware configuration for admin.
//!
//! Sets up in-memory sessions using tower-sessions with strict cookie
//! settings (SameSite=Strict, HttpOnly, 24hr inactivity expiry). The only
//! thing kept in a session is the user modal's [`FormSession`].

use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::AdminConfig;
use crate::error::AppError;
use crate::models::FormSession;

/// Session cookie name for admin.
pub const SESSION_COOKIE_NAME: &str = "bluebox_admin_session";

/// Session key holding the user modal state.
pub const FORM_SESSION_KEY: &str = "user_form";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// Sessions are lost when the process exits.
#[must_use]
pub fn create_session_layer(config: &AdminConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

/// Load the user modal state, defaulting to a closed modal.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
pub async fn load_form(session: &Session) -> Result<FormSession, AppError> {
    Ok(session
        .get::<FormSession>(FORM_SESSION_KEY)
        .await?
        .unwrap_or_default())
}

/// Persist the user modal state.
///
/// A closed modal is removed from the session instead of stored, so the
/// session holds nothing once the interaction is over.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
pub async fn store_form(session: &Session, form: &FormSession) -> Result<(), AppError> {
    if form.is_open() {
        session.insert(FORM_SESSION_KEY, form).await?;
    } else {
        session.remove::<FormSession>(FORM_SESSION_KEY).await?;
    }
    Ok(())
}
