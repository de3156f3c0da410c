use keyrelay_core::{Connection, Email, IdentityAccount, IdentityProviderError};
use secrecy::Secret;
use serde::Deserialize;

/// User record as returned by the management API.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderUser {
    email: Option<String>,
    #[serde(default)]
    identities: Vec<ProviderIdentity>,
}

#[derive(Debug, Deserialize)]
struct ProviderIdentity {
    provider: String,
    user_id: ExternalUserId,
    connection: String,
}

/// Social connections report numeric ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExternalUserId {
    Text(String),
    Number(u64),
}

impl ExternalUserId {
    fn into_string(self) -> String {
        match self {
            Self::Text(id) => id,
            Self::Number(id) => id.to_string(),
        }
    }
}

impl TryFrom<ProviderUser> for IdentityAccount {
    type Error = IdentityProviderError;

    /// Uses the first linked identity, which is the account's primary one.
    fn try_from(user: ProviderUser) -> Result<Self, Self::Error> {
        let email = user
            .email
            .ok_or_else(|| IdentityProviderError::MalformedAccount("missing email".into()))
            .and_then(|email| {
                Email::try_from(Secret::new(email))
                    .map_err(|e| IdentityProviderError::MalformedAccount(e.to_string()))
            })?;

        let identity = user.identities.into_iter().next().ok_or_else(|| {
            IdentityProviderError::MalformedAccount("user has no identities".into())
        })?;

        Ok(IdentityAccount::new(
            identity.provider,
            identity.user_id.into_string(),
            Connection::new(identity.connection),
            email,
        ))
    }
}
