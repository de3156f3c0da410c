use super::email::Email;

/// Application user resolved by the backend API from the caller's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUser {
    id: String,
    email: Email,
}

impl BackendUser {
    pub fn new(id: impl Into<String>, email: Email) -> Self {
        Self {
            id: id.into(),
            email,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}
