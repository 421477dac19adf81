//! User table and modal route handlers.
//!
//! Every handler redirects back to the dashboard, which renders the table
//! and, when a form session is open, the modal.

use axum::{
    Form, Router,
    extract::{Path, State, rejection::PathRejection},
    response::Redirect,
    routing::post,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use bluebox_core::UserId;

use crate::{
    error::AppError,
    middleware::{load_form, store_form},
    models::{FormField, SubmitOutcome},
    state::AppState,
};

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/new", post(open_create))
        .route("/users/{id}/edit", post(open_edit))
        .route("/users/{id}/status", post(cycle_status))
        .route("/users/form", post(submit))
        .route("/users/form/cancel", post(cancel))
}

// =============================================================================
// Form Input
// =============================================================================

/// Raw modal fields. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserFormInput {
    pub name: String,
    pub email: String,
    pub user_type: String,
}

impl UserFormInput {
    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::UserType => &self.user_type,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Open the modal with a blank draft.
///
/// POST /users/new
#[instrument(skip(session))]
async fn open_create(session: Session) -> Result<Redirect, AppError> {
    let mut form = load_form(&session).await?;
    form.open_for_create();
    store_form(&session, &form).await?;

    Ok(Redirect::to("/"))
}

/// Open the modal pre-filled from an existing record.
///
/// POST /users/{id}/edit
#[instrument(skip(state, session))]
async fn open_edit(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Redirect, AppError> {
    let Path(id) = id?;
    let id = UserId::new(id);

    let user = state
        .registry()
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    let mut form = load_form(&session).await?;
    form.open_for_edit(&user);
    store_form(&session, &form).await?;

    Ok(Redirect::to("/"))
}

/// Advance a record's status. Unknown IDs are ignored.
///
/// POST /users/{id}/status
#[instrument(skip(state))]
async fn cycle_status(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Redirect, AppError> {
    let Path(id) = id?;
    state.registry().write().await.cycle_status(UserId::new(id));

    Ok(Redirect::to("/"))
}

/// Copy the posted fields into the draft and submit it.
///
/// On a validation failure the modal stays open with its errors.
///
/// POST /users/form
#[instrument(skip(state, session, input))]
async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<UserFormInput>,
) -> Result<Redirect, AppError> {
    // Held until the form is saved, so a repeated post from the same
    // browser waits here and then finds the form closed.
    let mut registry = state.registry().write().await;

    let mut form = load_form(&session).await?;
    if !form.is_open() {
        tracing::debug!("Submit without an open form ignored");
        return Ok(Redirect::to("/"));
    }

    for field in FormField::ALL {
        form.update_field(field, input.value(field));
    }

    match form.submit(&mut registry) {
        SubmitOutcome::Rejected => {
            tracing::debug!(errors = form.errors().len(), "User form rejected");
        }
        SubmitOutcome::EditTargetMissing(id) => {
            tracing::warn!(user_id = %id, "Edited user no longer exists");
        }
        SubmitOutcome::Created(_) | SubmitOutcome::Updated(_) | SubmitOutcome::Ignored => {}
    }

    store_form(&session, &form).await?;
    session.save().await?;
    drop(registry);

    Ok(Redirect::to("/"))
}

/// Close the modal and discard the draft.
///
/// POST /users/form/cancel
#[instrument(skip(session))]
async fn cancel(session: Session) -> Result<Redirect, AppError> {
    let mut form = load_form(&session).await?;
    form.cancel();
    store_form(&session, &form).await?;

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_field_lookup() {
        let input = UserFormInput {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            user_type: "Editor".to_string(),
        };
        assert_eq!(input.value(FormField::Name), "Ada");
        assert_eq!(input.value(FormField::Email), "ada@x.com");
        assert_eq!(input.value(FormField::UserType), "Editor");
    }

    #[test]
    fn test_form_input_defaults_to_empty() {
        let input = UserFormInput::default();
        assert!(FormField::ALL.iter().all(|f| input.value(*f).is_empty()));
    }
}
