use thiserror::Error;

use crate::domain::input_error::InputError;

/// Failures reported by an identity-provider adapter.
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to obtain management token: {0}")]
    Token(String),
    #[error("Malformed account: {0}")]
    MalformedAccount(String),
}

/// Failures reported by the backend API adapter.
#[derive(Debug, Error)]
pub enum BackendApiError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum SessionResolutionError {
    #[error("no user is associated with the session")]
    NoUser,
    #[error(transparent)]
    Backend(#[from] BackendApiError),
}

/// Terminal failure of a resolver invocation. None of these are retried.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Failed to look up identity accounts: {0}")]
    ProviderLookup(#[source] IdentityProviderError),
    #[error("No such user")]
    UserNotFound,
    #[error("Failed to request a change password email: {0}")]
    ProviderDispatch(#[source] IdentityProviderError),
    #[error("Couldn't identify a user: {0}")]
    SessionResolution(#[from] SessionResolutionError),
    #[error("Failed to update password: {0}")]
    ProviderUpdate(#[source] IdentityProviderError),
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl ResolverError {
    /// Stable identifier reported to callers alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProviderLookup(_) => "ProviderLookupError",
            Self::UserNotFound => "UserNotFound",
            Self::ProviderDispatch(_) => "ProviderDispatchError",
            Self::SessionResolution(_) => "SessionResolutionError",
            Self::ProviderUpdate(_) => "ProviderUpdateError",
            Self::InvalidInput(_) => "InvalidInput",
        }
    }
}
