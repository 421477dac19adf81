//! Domain models for admin.
//!
//! - [`user`] - user records, drafts and form field names
//! - [`form`] - the add/edit modal session and its validation

pub mod form;
pub mod user;

pub use form::{FormErrors, FormMode, FormSession, SubmitOutcome, ValidDraft};
pub use user::{FormField, User, UserDraft};
