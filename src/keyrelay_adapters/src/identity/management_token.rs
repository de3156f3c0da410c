use std::{sync::Arc, time::Duration};

use keyrelay_core::IdentityProviderError;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tokio::{sync::RwLock, time::Instant};

use super::{endpoint, ensure_success};
use crate::config::auth0::{TOKEN_EXPIRY_MARGIN, TOKEN_PATH};

/// Supplies bearer tokens for the management API.
///
/// Tokens come either from configuration or from a client-credentials exchange.
/// Exchanged tokens are cached until shortly before they expire. Cloning
/// shares the cache.
#[derive(Clone)]
pub struct ManagementTokenProvider {
    source: TokenSource,
}

#[derive(Clone)]
enum TokenSource {
    Static(Secret<String>),
    ClientCredentials(Arc<ClientCredentials>),
}

struct ClientCredentials {
    http_client: Client,
    base_url: Url,
    client_id: String,
    client_secret: Secret<String>,
    audience: String,
    cached: RwLock<Option<CachedToken>>,
}

struct CachedToken {
    access_token: Secret<String>,
    refresh_at: Instant,
}

impl ManagementTokenProvider {
    pub fn fixed(token: Secret<String>) -> Self {
        Self {
            source: TokenSource::Static(token),
        }
    }

    pub fn client_credentials(
        http_client: Client,
        base_url: Url,
        client_id: String,
        client_secret: Secret<String>,
        audience: String,
    ) -> Self {
        Self {
            source: TokenSource::ClientCredentials(Arc::new(ClientCredentials {
                http_client,
                base_url,
                client_id,
                client_secret,
                audience,
                cached: RwLock::new(None),
            })),
        }
    }

    pub async fn token(&self) -> Result<Secret<String>, IdentityProviderError> {
        match &self.source {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::ClientCredentials(credentials) => credentials.token().await,
        }
    }
}

impl ClientCredentials {
    async fn token(&self) -> Result<Secret<String>, IdentityProviderError> {
        if let Some(cached) = self.cached.read().await.as_ref() {
            if Instant::now() < cached.refresh_at {
                return Ok(cached.access_token.clone());
            }
        }

        // Concurrent refreshes may both hit the token endpoint; the last write wins.
        let fresh = self.exchange().await?;
        let access_token = fresh.access_token.clone();
        *self.cached.write().await = Some(fresh);

        Ok(access_token)
    }

    #[tracing::instrument(name = "Requesting management token", skip_all)]
    async fn exchange(&self) -> Result<CachedToken, IdentityProviderError> {
        let url = endpoint(&self.base_url, TOKEN_PATH)?;

        let request_body = TokenRequest {
            grant_type: GRANT_TYPE,
            client_id: &self.client_id,
            client_secret: self.client_secret.expose_secret(),
            audience: &self.audience,
        };

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Token(e.to_string()))?;

        let response = ensure_success(response)
            .await
            .map_err(|e| IdentityProviderError::Token(e.to_string()))?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| IdentityProviderError::Token(e.to_string()))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);

        Ok(CachedToken {
            access_token: Secret::new(token.access_token),
            refresh_at: Instant::now() + lifetime,
        })
    }
}

const GRANT_TYPE: &str = "client_credentials";

#[derive(Serialize, Debug)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}
