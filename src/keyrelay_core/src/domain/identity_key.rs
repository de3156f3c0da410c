use std::fmt;

use super::identity_account::IdentityAccount;

const SEPARATOR: char = '|';

/// Composite key addressing a single identity-provider account: `provider|user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn new(provider: &str, external_user_id: &str) -> Self {
        Self(format!("{provider}{SEPARATOR}{external_user_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&IdentityAccount> for IdentityKey {
    fn from(account: &IdentityAccount) -> Self {
        account.key()
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
