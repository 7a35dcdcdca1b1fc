//! The directory of administrative users.

use csm_survey_types::{SurveyError, User, UserUpdate};

use crate::ident;

/// Administrative user records, consumed only by the admin surface.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from existing users.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Add a user, assigning the id as one more than the current maximum
    /// (1 when the directory is empty). Returns the assigned id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> u32 {
        let id = ident::next_id(self.users.iter().map(|user| user.id));
        self.users.push(User {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
        });
        id
    }

    /// Merge a partial-field patch into the user with `id`.
    ///
    /// Fails with [`SurveyError::NotFound`] if the id is absent, leaving the
    /// directory unchanged.
    pub fn update(&mut self, id: u32, update: UserUpdate) -> Result<(), SurveyError> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| SurveyError::NotFound(id.to_string()))?;
        update.apply_to(user);
        Ok(())
    }

    /// Remove the user with `id`. Removing an absent id is a no-op.
    pub fn delete(&mut self, id: u32) {
        self.users.retain(|user| user.id != id);
    }

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id.
    pub fn get(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
