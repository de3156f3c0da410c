use axum::{Json, extract::State, extract::rejection::JsonRejection};
use keyrelay_adapters::handlers::{self, ForgotPasswordEvent, ResolverResponse};
use keyrelay_core::{IdentityAuthentication, IdentityManagement};

/// Axum forgot password route.
///
/// Always answers `200 OK`; failures, including unparseable bodies, are
/// reported in the body.
#[tracing::instrument(name = "Forgot Password", skip_all)]
pub async fn user_forgot_password<M, A>(
    State((management, authentication)): State<(M, A)>,
    payload: Result<Json<ForgotPasswordEvent>, JsonRejection>,
) -> Json<ResolverResponse>
where
    M: IdentityManagement + Clone + 'static,
    A: IdentityAuthentication + Clone + 'static,
{
    let response = match payload {
        Ok(Json(event)) => {
            handlers::handle_forgot_password(management, authentication, event).await
        }
        Err(rejection) => handlers::reject_payload(rejection.body_text()),
    };

    Json(response)
}
