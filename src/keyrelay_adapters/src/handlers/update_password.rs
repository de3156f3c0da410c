//! Framework-agnostic update password handler.

use keyrelay_application::UpdatePasswordUseCase;
use keyrelay_core::{
    BackendApi, IdentityManagement, InputError, Password, ResolverError, SessionContext,
};

use super::{ResolverResponse, UpdatePasswordEvent, report};

/// Runs the update password flow for the session's user and reports the outcome.
///
/// # Arguments
/// * `backend` - Backend API client used to resolve the session
/// * `management` - Identity-provider management API client
/// * `session` - Caller session extracted by the route
/// * `event` - Event payload carrying the new password
#[tracing::instrument(name = "userUpdatePassword", skip_all)]
pub async fn handle_update_password<B, M>(
    backend: B,
    management: M,
    session: SessionContext,
    event: UpdatePasswordEvent,
) -> ResolverResponse
where
    B: BackendApi,
    M: IdentityManagement,
{
    report(update_password(backend, management, session, event).await)
}

async fn update_password<B, M>(
    backend: B,
    management: M,
    session: SessionContext,
    event: UpdatePasswordEvent,
) -> Result<(), ResolverError>
where
    B: BackendApi,
    M: IdentityManagement,
{
    let password = event
        .data
        .password
        .ok_or(InputError::EmptyPassword)
        .and_then(Password::try_from)?;

    UpdatePasswordUseCase::new(backend, management)
        .execute(&session, password)
        .await
}
