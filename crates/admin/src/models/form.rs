//! User modal form session.
//!
//! A [`FormSession`] holds everything the add/edit modal needs between
//! requests: the draft being typed, the errors from the last submit, and
//! whether the modal is closed, creating, or editing a specific record.
//!
//! ```text
//! Closed         --open_for_create-->          Create
//! Closed         --open_for_edit(user)-->      Edit(user.id)
//! Create | Edit  --cancel | valid submit-->    Closed
//! Create | Edit  --update_field | invalid submit--> (unchanged, stays open)
//! ```
//!
//! Validation only runs on submit; editing a field never re-validates.

use serde::{Deserialize, Serialize};

use bluebox_core::{Email, EmailError, JoinDate, UserId, UserType};

use crate::db::UserRegistry;

use super::user::{FormField, User, UserDraft};

/// Message shown when the name is blank.
pub const NAME_REQUIRED: &str = "Name is required";
/// Message shown when the email is blank.
pub const EMAIL_REQUIRED: &str = "Email is required";
/// Message shown when the email does not look like `local@domain.tld`.
pub const EMAIL_INVALID: &str = "Invalid email format";
/// Message shown when no user type is selected.
pub const USER_TYPE_REQUIRED: &str = "User type is required";

/// Per-field validation messages. A field is absent when it passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    name: Option<String>,
    email: Option<String>,
    user_type: Option<String>,
}

impl FormErrors {
    /// Message for `field`, if it failed validation.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Record a message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// True when every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.slot(*field).is_none())
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        FormField::ALL
            .iter()
            .filter(|field| self.slot(**field).is_some())
            .count()
    }

    /// Failing fields and their messages, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::UserType => &self.user_type,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::UserType => &mut self.user_type,
        }
    }
}

/// A draft that passed validation.
///
/// Only [`UserDraft::validate`] produces one, so the registry never sees
/// unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    name: String,
    email: Email,
    user_type: UserType,
}

impl ValidDraft {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }
}

impl UserDraft {
    /// Check every field, returning all failures at once.
    ///
    /// # Errors
    ///
    /// Returns the [`FormErrors`] for each failing field.
    pub fn validate(&self) -> Result<ValidDraft, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, NAME_REQUIRED);
        }

        let email = match Email::parse(&self.email) {
            Ok(email) => Some(email),
            Err(EmailError::Empty) => {
                errors.insert(FormField::Email, EMAIL_REQUIRED);
                None
            }
            Err(_) => {
                errors.insert(FormField::Email, EMAIL_INVALID);
                None
            }
        };

        if self.user_type.is_none() {
            errors.insert(FormField::UserType, USER_TYPE_REQUIRED);
        }

        match (email, self.user_type) {
            (Some(email), Some(user_type)) if errors.is_empty() => Ok(ValidDraft {
                name: self.name.clone(),
                email,
                user_type,
            }),
            _ => Err(errors),
        }
    }
}

/// Whether the modal is shown, and for which record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(UserId),
}

/// What a call to [`FormSession::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended.
    Created(User),
    /// The record being edited was updated.
    Updated(User),
    /// The draft was valid but the record being edited no longer exists.
    EditTargetMissing(UserId),
    /// Validation failed; errors are stored on the session.
    Rejected,
    /// The modal was not open.
    Ignored,
}

/// State of the add/edit user modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSession {
    draft: UserDraft,
    errors: FormErrors,
    mode: FormMode,
}

impl FormSession {
    /// Open the modal with a blank draft for a new record.
    pub fn open_for_create(&mut self) {
        *self = Self {
            draft: UserDraft::default(),
            errors: FormErrors::default(),
            mode: FormMode::Create,
        };
    }

    /// Open the modal pre-filled from `user`.
    pub fn open_for_edit(&mut self, user: &User) {
        *self = Self {
            draft: UserDraft::from(user),
            errors: FormErrors::default(),
            mode: FormMode::Edit(user.id),
        };
    }

    /// Overwrite one draft field with raw input.
    ///
    /// An unrecognised user type clears the selection.
    pub fn update_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => value.clone_into(&mut self.draft.name),
            FormField::Email => value.clone_into(&mut self.draft.email),
            FormField::UserType => self.draft.user_type = value.parse().ok(),
        }
    }

    /// Validate the current draft. Does not store the result.
    ///
    /// # Errors
    ///
    /// Returns the [`FormErrors`] for each failing field.
    pub fn validate(&self) -> Result<ValidDraft, FormErrors> {
        self.draft.validate()
    }

    /// Validate and, if valid, create or update a record, stamping new
    /// records with today's date.
    pub fn submit(&mut self, registry: &mut UserRegistry) -> SubmitOutcome {
        self.submit_on(registry, JoinDate::today())
    }

    /// [`FormSession::submit`] with an explicit join date for new records.
    pub fn submit_on(&mut self, registry: &mut UserRegistry, today: JoinDate) -> SubmitOutcome {
        if self.mode == FormMode::Closed {
            return SubmitOutcome::Ignored;
        }

        let valid = match self.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                self.errors = errors;
                return SubmitOutcome::Rejected;
            }
        };

        let outcome = match self.mode {
            FormMode::Edit(id) => registry
                .update(id, valid)
                .map_or(SubmitOutcome::EditTargetMissing(id), SubmitOutcome::Updated),
            FormMode::Create | FormMode::Closed => {
                SubmitOutcome::Created(registry.create_on(valid, today))
            }
        };

        self.reset();
        outcome
    }

    /// Close the modal without touching the registry.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// ID of the record being edited, if any.
    #[must_use]
    pub const fn editing_target(&self) -> Option<UserId> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Closed | FormMode::Create => None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub const fn draft(&self) -> &UserDraft {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }
}
