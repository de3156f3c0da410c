use keyrelay_core::{
    BackendApi, IdentityKey, IdentityManagement, Password, ResolverError, SessionContext,
    SessionResolutionError,
};

use super::first_account;

/// Update password use case - sets the session user's password at the identity provider
pub struct UpdatePasswordUseCase<B, M>
where
    B: BackendApi,
    M: IdentityManagement,
{
    backend: B,
    management: M,
}

impl<B, M> UpdatePasswordUseCase<B, M>
where
    B: BackendApi,
    M: IdentityManagement,
{
    pub fn new(backend: B, management: M) -> Self {
        Self {
            backend,
            management,
        }
    }

    /// Execute the update password use case
    ///
    /// # Arguments
    /// * `session` - Caller session, used to resolve the backend user
    /// * `new_password` - The password to set at the identity provider
    ///
    /// # Returns
    /// Ok(()) on success, or the ResolverError of the first failing step
    #[tracing::instrument(name = "UpdatePasswordUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        session: &SessionContext,
        new_password: Password,
    ) -> Result<(), ResolverError> {
        let user = self
            .backend
            .current_user(session)
            .await
            .map_err(SessionResolutionError::from)?
            .ok_or(SessionResolutionError::NoUser)?;

        tracing::debug!(user_id = user.id(), "Resolved backend user");

        let accounts = self
            .management
            .users_by_email(user.email())
            .await
            .map_err(ResolverError::ProviderLookup)?;

        let key = IdentityKey::from(&first_account(accounts)?);

        self.management
            .update_password(&key, &new_password)
            .await
            .map_err(ResolverError::ProviderUpdate)?;

        tracing::info!(identity = %key, "Password updated");

        Ok(())
    }
}
