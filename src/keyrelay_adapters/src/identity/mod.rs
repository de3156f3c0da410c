//! Auth0-compatible identity-provider adapters.

pub mod auth0_authentication_client;
pub mod auth0_management_client;
pub mod management_token;
mod models;

pub use auth0_authentication_client::Auth0AuthenticationClient;
pub use auth0_management_client::Auth0ManagementClient;
pub use management_token::ManagementTokenProvider;

use keyrelay_core::IdentityProviderError;
use reqwest::{Response, Url};

/// Resolves `path` against the provider base URL, keeping any base path.
pub(crate) fn endpoint(base_url: &Url, path: &str) -> Result<Url, IdentityProviderError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(path)
        .map_err(|e| IdentityProviderError::Transport(e.to_string()))
}

/// Turns non-2xx responses into `UnexpectedStatus`, keeping the body for the error report.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, IdentityProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(IdentityProviderError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}

pub(crate) fn transport_error(error: reqwest::Error) -> IdentityProviderError {
    IdentityProviderError::Transport(error.to_string())
}
