//! In-memory user registry.
//!
//! Records are kept in insertion order and never sorted. IDs come from a
//! counter that only moves forward, so an ID is never handed out twice.

use bluebox_core::{Email, EmailError, JoinDate, UserId, UserStatus, UserType};

use crate::models::{User, ValidDraft};

/// The in-memory collection of user records.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry {
    /// Create an empty registry. The first record gets ID 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: UserId::new(1),
        }
    }

    /// Create a registry holding `users` as-is.
    ///
    /// New IDs continue after the highest existing one.
    #[must_use]
    pub fn from_users(users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(UserId::new(1), |id| id.successor());

        Self { users, next_id }
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Find a record by ID.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Append a new record joined today with status `Pending`.
    pub fn create(&mut self, draft: ValidDraft) -> User {
        self.create_on(draft, JoinDate::today())
    }

    /// Append a new record joined on `joined` with status `Pending`.
    pub fn create_on(&mut self, draft: ValidDraft, joined: JoinDate) -> User {
        let id = self.next_id;
        self.next_id = id.successor();

        let user = User {
            id,
            name: draft.name().to_owned(),
            email: draft.email().clone(),
            user_type: draft.user_type(),
            joined,
            status: UserStatus::Pending,
        };

        tracing::info!(user_id = %id, user_type = %user.user_type, "User created");
        self.users.push(user.clone());
        user
    }

    /// Replace the name, email and type of the record with `id`.
    ///
    /// ID, join date and status are left alone. Returns the updated record,
    /// or `None` (and changes nothing) if no record has that ID.
    pub fn update(&mut self, id: UserId, draft: ValidDraft) -> Option<User> {
        let Some(user) = self.users.iter_mut().find(|user| user.id == id) else {
            tracing::debug!(user_id = %id, "Update for unknown user ignored");
            return None;
        };

        draft.name().clone_into(&mut user.name);
        user.email = draft.email().clone();
        user.user_type = draft.user_type();

        tracing::info!(user_id = %id, user_type = %user.user_type, "User updated");
        Some(user.clone())
    }

    /// Advance the status of the record with `id` one step along the cycle.
    ///
    /// Returns the new status, or `None` (and changes nothing) if no record
    /// has that ID.
    pub fn cycle_status(&mut self, id: UserId) -> Option<UserStatus> {
        let Some(user) = self.users.iter_mut().find(|user| user.id == id) else {
            tracing::debug!(user_id = %id, "Status cycle for unknown user ignored");
            return None;
        };

        let previous = user.status;
        user.status = previous.next();

        tracing::info!(
            user_id = %id,
            from = %previous,
            to = %user.status,
            "User status cycled"
        );
        Some(user.status)
    }
}

/// The five sample records the dashboard starts with.
///
/// # Errors
///
/// Returns an error if a sample email fails to parse.
pub fn demo_users() -> Result<Vec<User>, EmailError> {
    const SEED: [(u64, &str, &str, UserType, UserStatus); 5] = [
        (1, "Max Brand", "maxbrand@mail.com", UserType::Admin, UserStatus::Pending),
        (2, "Andrew Simon", "info@gmail.com", UserType::Editor, UserStatus::Approved),
        (3, "Ron Kiperman", "ronkiperman@gmail.com", UserType::Subscriber, UserStatus::Approved),
        (4, "Mike Hardy", "mikehardy@gmail.com", UserType::Admin, UserStatus::Denied),
        (5, "Kevin Peterson", "kevinp@gmail.com", UserType::Admin, UserStatus::Pending),
    ];

    let joined = JoinDate::from_ymd(2024, 4, 25).unwrap_or_else(JoinDate::today);

    SEED.into_iter()
        .map(|(id, name, email, user_type, status)| {
            Ok(User {
                id: UserId::new(id),
                name: name.to_string(),
                email: Email::parse(email)?,
                user_type,
                joined,
                status,
            })
        })
        .collect()
}
