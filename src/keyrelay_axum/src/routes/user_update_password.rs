use axum::{Json, extract::State, extract::rejection::JsonRejection};
use keyrelay_adapters::handlers::{self, ResolverResponse, UpdatePasswordEvent};
use keyrelay_core::{BackendApi, IdentityManagement};

use crate::extract::Session;

/// Axum update password route.
///
/// The session comes from the `Authorization` header and is resolved against
/// the backend API by the handler. An unparseable body is reported without
/// contacting either API.
#[tracing::instrument(name = "Update Password", skip_all)]
pub async fn user_update_password<B, M>(
    State((backend, management)): State<(B, M)>,
    Session(session): Session,
    payload: Result<Json<UpdatePasswordEvent>, JsonRejection>,
) -> Json<ResolverResponse>
where
    B: BackendApi + Clone + 'static,
    M: IdentityManagement + Clone + 'static,
{
    let response = match payload {
        Ok(Json(event)) => {
            handlers::handle_update_password(backend, management, session, event).await
        }
        Err(rejection) => handlers::reject_payload(rejection.body_text()),
    };

    Json(response)
}
