use keyrelay_core::{Connection, Email, IdentityAuthentication, IdentityProviderError};
use reqwest::{Client, Url};

use super::{endpoint, ensure_success, transport_error};
use crate::config::auth0::CHANGE_PASSWORD_PATH;

/// Authentication API client. Only the change-password email flow is used.
#[derive(Clone)]
pub struct Auth0AuthenticationClient {
    http_client: Client,
    base_url: Url,
    client_id: String,
}

impl Auth0AuthenticationClient {
    pub fn new(base_url: Url, client_id: String, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            client_id,
        }
    }
}

#[async_trait::async_trait]
impl IdentityAuthentication for Auth0AuthenticationClient {
    #[tracing::instrument(
        name = "Requesting change password email",
        skip_all,
        fields(connection = %connection)
    )]
    async fn request_change_password_email(
        &self,
        email: &Email,
        connection: &Connection,
    ) -> Result<(), IdentityProviderError> {
        let url = endpoint(&self.base_url, CHANGE_PASSWORD_PATH)?;

        let request_body = ChangePasswordRequest {
            client_id: &self.client_id,
            email: email.expose(),
            connection: connection.as_str(),
        };

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(transport_error)?;

        // The provider answers with a plain-text confirmation; only the status matters.
        ensure_success(response).await?;

        Ok(())
    }
}

#[derive(serde::Serialize, Debug)]
struct ChangePasswordRequest<'a> {
    client_id: &'a str,
    email: &'a str,
    connection: &'a str,
}
