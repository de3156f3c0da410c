use keyrelay_core::{
    Email, IdentityAccount, IdentityKey, IdentityManagement, IdentityProviderError, Password,
};
use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use serde::Serialize;

use super::{
    ManagementTokenProvider, endpoint, ensure_success, models::ProviderUser, transport_error,
};
use crate::config::auth0::{USERS_BY_EMAIL_PATH, USERS_PATH};

/// Management API client: account lookup and password updates.
#[derive(Clone)]
pub struct Auth0ManagementClient {
    http_client: Client,
    base_url: Url,
    tokens: ManagementTokenProvider,
}

impl Auth0ManagementClient {
    pub fn new(base_url: Url, tokens: ManagementTokenProvider, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            tokens,
        }
    }

    fn user_url(&self, key: &IdentityKey) -> Result<Url, IdentityProviderError> {
        let mut url = endpoint(&self.base_url, USERS_PATH)?;
        let path = format!("{}/{}", url.path(), urlencoding::encode(key.as_str()));
        url.set_path(&path);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl IdentityManagement for Auth0ManagementClient {
    #[tracing::instrument(name = "Looking up users by email", skip_all)]
    async fn users_by_email(
        &self,
        email: &Email,
    ) -> Result<Vec<IdentityAccount>, IdentityProviderError> {
        let url = endpoint(&self.base_url, USERS_BY_EMAIL_PATH)?;
        let token = self.tokens.token().await?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token.expose_secret())
            .query(&[("email", email.expose())])
            .send()
            .await
            .map_err(transport_error)?;

        let users: Vec<ProviderUser> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| IdentityProviderError::Decode(e.to_string()))?;

        tracing::debug!(matches = users.len(), "Identity provider lookup finished");

        let mut users = users.into_iter();
        let Some(first) = users.next() else {
            return Ok(Vec::new());
        };

        // Callers act on the first record only.
        let mut accounts = vec![IdentityAccount::try_from(first)?];
        for user in users {
            match IdentityAccount::try_from(user) {
                Ok(account) => accounts.push(account),
                Err(error) => {
                    tracing::warn!(error = %error, "Skipping malformed identity record")
                }
            }
        }

        Ok(accounts)
    }

    #[tracing::instrument(name = "Updating user password", skip(self, password))]
    async fn update_password(
        &self,
        key: &IdentityKey,
        password: &Password,
    ) -> Result<IdentityAccount, IdentityProviderError> {
        let url = self.user_url(key)?;
        let token = self.tokens.token().await?;

        let request_body = UpdatePasswordRequest {
            password: password.as_ref().expose_secret(),
        };

        let response = self
            .http_client
            .patch(url)
            .bearer_auth(token.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(transport_error)?;

        let user: ProviderUser = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(|e| IdentityProviderError::Decode(e.to_string()))?;

        IdentityAccount::try_from(user)
    }
}

#[derive(Serialize)]
struct UpdatePasswordRequest<'a> {
    password: &'a str,
}
