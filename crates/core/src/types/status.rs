//! Closed-set enums for user records.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`UserType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid user type: {0}")]
pub struct ParseUserTypeError(pub String);

/// Error returned when a string does not name a [`UserStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid user status: {0}")]
pub struct ParseUserStatusError(pub String);

/// Role of a managed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserType {
    Admin,
    Editor,
    #[default]
    Subscriber,
}

impl UserType {
    /// Every user type in the order the type selector lists them.
    pub const SELECTOR_ORDER: [Self; 3] = [Self::Subscriber, Self::Editor, Self::Admin];

    /// The display and form value of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Subscriber => "Subscriber",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = ParseUserTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Editor" => Ok(Self::Editor),
            "Subscriber" => Ok(Self::Subscriber),
            _ => Err(ParseUserTypeError(s.to_owned())),
        }
    }
}

/// Approval status of a managed user.
///
/// Status only ever moves along the cycle
/// `Pending -> Approved -> Denied -> Pending`; see [`UserStatus::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl UserStatus {
    /// The status that follows this one in the approval cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pending => Self::Approved,
            Self::Approved => Self::Denied,
            Self::Denied => Self::Pending,
        }
    }

    /// Upper-case label shown on the status badge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Denied => "DENIED",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = ParseUserStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "DENIED" => Ok(Self::Denied),
            _ => Err(ParseUserStatusError(s.to_owned())),
        }
    }
}
