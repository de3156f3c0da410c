use std::time::Duration;

use keyrelay_adapters::{
    backend::GraphQlBackendClient,
    config::Settings,
    identity::{Auth0AuthenticationClient, Auth0ManagementClient, ManagementTokenProvider},
};
use reqwest::{Client, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceBuildError {
    #[error("Invalid {name} URL '{value}': {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Remote-service clients the resolvers are wired with.
#[derive(Clone)]
pub struct ResolverClients {
    pub management: Auth0ManagementClient,
    pub authentication: Auth0AuthenticationClient,
    pub backend: GraphQlBackendClient,
}

/// Create an HTTP client with the given request timeout
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Construct every remote-service client from configuration.
///
/// The identity-provider clients share one HTTP client and the management
/// token cache is shared by all clones of the management client.
pub fn build_clients(settings: &Settings) -> Result<ResolverClients, ServiceBuildError> {
    let auth0_url = parse_url("auth0.base_url", &settings.auth0.base_url)?;
    let backend_url = parse_url("backend.graphql_url", &settings.backend.graphql_url)?;

    let identity_http_client = build_http_client(settings.auth0.timeout())?;
    let backend_http_client = build_http_client(settings.backend.timeout())?;

    let tokens = match &settings.auth0.management_token {
        Some(token) => ManagementTokenProvider::fixed(token.clone()),
        None => ManagementTokenProvider::client_credentials(
            identity_http_client.clone(),
            auth0_url.clone(),
            settings.auth0.client_id.clone(),
            settings.auth0.client_secret.clone(),
            settings.auth0.audience(),
        ),
    };

    Ok(ResolverClients {
        management: Auth0ManagementClient::new(
            auth0_url.clone(),
            tokens,
            identity_http_client.clone(),
        ),
        authentication: Auth0AuthenticationClient::new(
            auth0_url,
            settings.auth0.client_id.clone(),
            identity_http_client,
        ),
        backend: GraphQlBackendClient::new(backend_url, backend_http_client),
    })
}

fn parse_url(name: &'static str, value: &str) -> Result<Url, ServiceBuildError> {
    Url::parse(value).map_err(|e| ServiceBuildError::InvalidUrl {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
