use async_trait::async_trait;

use crate::{
    domain::{backend_user::BackendUser, session::SessionContext},
    error::BackendApiError,
};

/// Port for the hosted GraphQL backend.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Resolves the user the session belongs to. `Ok(None)` when the backend
    /// knows no user for the session.
    async fn current_user(
        &self,
        session: &SessionContext,
    ) -> Result<Option<BackendUser>, BackendApiError>;
}
