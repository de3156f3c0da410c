//! Framework-agnostic forgot password handler.

use keyrelay_application::ForgotPasswordUseCase;
use keyrelay_core::{
    Email, IdentityAuthentication, IdentityManagement, InputError, ResolverError,
};

use super::{ForgotPasswordEvent, ResolverResponse, report};

/// Runs the forgot password flow for `event` and reports the outcome.
///
/// # Type Parameters
/// * `M` - Identity-provider management API client
/// * `A` - Identity-provider authentication API client
#[tracing::instrument(name = "userForgotPassword", skip_all)]
pub async fn handle_forgot_password<M, A>(
    management: M,
    authentication: A,
    event: ForgotPasswordEvent,
) -> ResolverResponse
where
    M: IdentityManagement,
    A: IdentityAuthentication,
{
    report(forgot_password(management, authentication, event).await)
}

async fn forgot_password<M, A>(
    management: M,
    authentication: A,
    event: ForgotPasswordEvent,
) -> Result<(), ResolverError>
where
    M: IdentityManagement,
    A: IdentityAuthentication,
{
    let email = event
        .data
        .email
        .ok_or(InputError::EmptyEmail)
        .and_then(Email::try_from)?;

    ForgotPasswordUseCase::new(management, authentication)
        .execute(email)
        .await
}
