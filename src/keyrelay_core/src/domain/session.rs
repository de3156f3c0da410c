use secrecy::Secret;

/// Caller session forwarded to the backend API.
///
/// An anonymous session still reaches the backend, which then resolves no user.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<Secret<String>>,
}

impl SessionContext {
    pub fn bearer(token: Secret<String>) -> Self {
        Self { token: Some(token) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&Secret<String>> {
        self.token.as_ref()
    }
}
