use secrecy::{ExposeSecret, Secret};

use super::input_error::InputError;

/// New password supplied by the caller. Never trimmed and never logged.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = InputError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(InputError::EmptyPassword);
        }
        Ok(Self(value))
    }
}
