//! Managed user domain types.

use serde::{Deserialize, Serialize};

use bluebox_core::{Email, JoinDate, UserId, UserStatus, UserType};

/// A user record held in the registry (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique ID, assigned by the registry on creation.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Role of the user.
    pub user_type: UserType,
    /// Day the record was created. Never modified.
    pub joined: JoinDate,
    /// Approval status. Only changed by cycling.
    pub status: UserStatus,
}

/// Unsaved values being edited in the user modal.
///
/// Fields hold raw input; nothing here has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    /// `None` when the selector posted no value, or one that is not a user type.
    pub user_type: Option<UserType>,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            user_type: Some(UserType::default()),
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.to_string(),
            user_type: Some(user.user_type),
        }
    }
}

/// An editable field of the user modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    UserType,
}

impl FormField {
    /// Every field, in the order the modal renders them.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::UserType];

    /// The HTML form input name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::UserType => "user_type",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
