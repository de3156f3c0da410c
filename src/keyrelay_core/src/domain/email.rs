use secrecy::{ExposeSecret, Secret};

use super::input_error::InputError;

/// Email address as received from the caller.
///
/// Only emptiness is checked here. Format validation is left to the identity
/// provider, which rejects addresses it cannot deliver to.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = InputError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let trimmed = value.expose_secret().trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyEmail);
        }
        Ok(Self(Secret::new(trimmed.to_owned())))
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}
