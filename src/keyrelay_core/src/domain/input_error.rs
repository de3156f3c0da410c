use thiserror::Error;

/// Rejections raised while turning an event payload into domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Email must not be empty")]
    EmptyEmail,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Malformed event payload: {0}")]
    MalformedPayload(String),
}
