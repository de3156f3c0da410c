use super::{connection::Connection, email::Email, identity_key::IdentityKey};

/// Read-only view of an account held by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAccount {
    identity_provider: String,
    external_user_id: String,
    connection: Connection,
    email: Email,
}

impl IdentityAccount {
    pub fn new(
        identity_provider: impl Into<String>,
        external_user_id: impl Into<String>,
        connection: Connection,
        email: Email,
    ) -> Self {
        Self {
            identity_provider: identity_provider.into(),
            external_user_id: external_user_id.into(),
            connection,
            email,
        }
    }

    pub fn identity_provider(&self) -> &str {
        &self.identity_provider
    }

    pub fn external_user_id(&self) -> &str {
        &self.external_user_id
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn key(&self) -> IdentityKey {
        IdentityKey::new(&self.identity_provider, &self.external_user_id)
    }
}
