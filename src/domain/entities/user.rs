//! User entity.

/// A persisted user.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `email` is a lookup key but is not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new(1, "Alice".to_string(), "alice@example.com".to_string());
    /// ```
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    /// Overwrites the mutable fields, keeping the id.
    pub fn apply(&mut self, changes: NewUser) {
        self.name = changes.name;
        self.email = changes.email;
    }
}

/// Input data for creating a user, or for overwriting an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
