use async_trait::async_trait;

use crate::{
    domain::{
        connection::Connection, email::Email, identity_account::IdentityAccount,
        identity_key::IdentityKey, password::Password,
    },
    error::IdentityProviderError,
};

/// Port for the identity provider's management API.
#[async_trait]
pub trait IdentityManagement: Send + Sync {
    /// Accounts registered under `email`, in the order the provider returns them.
    async fn users_by_email(
        &self,
        email: &Email,
    ) -> Result<Vec<IdentityAccount>, IdentityProviderError>;

    async fn update_password(
        &self,
        key: &IdentityKey,
        password: &Password,
    ) -> Result<IdentityAccount, IdentityProviderError>;
}

/// Port for the identity provider's authentication API.
#[async_trait]
pub trait IdentityAuthentication: Send + Sync {
    async fn request_change_password_email(
        &self,
        email: &Email,
        connection: &Connection,
    ) -> Result<(), IdentityProviderError>;
}
