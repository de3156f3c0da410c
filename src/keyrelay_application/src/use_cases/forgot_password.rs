use keyrelay_core::{Email, IdentityAuthentication, IdentityManagement, ResolverError};

use super::first_account;

/// Forgot password use case - asks the identity provider to email a reset link
pub struct ForgotPasswordUseCase<M, A>
where
    M: IdentityManagement,
    A: IdentityAuthentication,
{
    management: M,
    authentication: A,
}

impl<M, A> ForgotPasswordUseCase<M, A>
where
    M: IdentityManagement,
    A: IdentityAuthentication,
{
    pub fn new(management: M, authentication: A) -> Self {
        Self {
            management,
            authentication,
        }
    }

    /// Execute the forgot password use case
    ///
    /// # Arguments
    /// * `email` - Address the reset link should go to
    ///
    /// # Returns
    /// Ok(()) once the provider accepted the dispatch request, or the
    /// ResolverError of the first failing step
    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email) -> Result<(), ResolverError> {
        let accounts = self
            .management
            .users_by_email(&email)
            .await
            .map_err(ResolverError::ProviderLookup)?;

        let account = first_account(accounts)?;

        self.authentication
            .request_change_password_email(&email, account.connection())
            .await
            .map_err(ResolverError::ProviderDispatch)?;

        tracing::info!(connection = %account.connection(), "Change password email requested");

        Ok(())
    }
}
