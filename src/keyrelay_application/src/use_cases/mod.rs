pub mod forgot_password;
pub mod update_password;

use keyrelay_core::{IdentityAccount, ResolverError};

/// Picks the account a flow acts on.
///
/// The provider may return several accounts for one email (one per linked
/// connection). The first one is used and the ambiguity is only logged.
pub(crate) fn first_account(
    accounts: Vec<IdentityAccount>,
) -> Result<IdentityAccount, ResolverError> {
    if accounts.len() > 1 {
        tracing::warn!(
            matches = accounts.len(),
            "Multiple identity accounts share this email, using the first"
        );
    }

    accounts.into_iter().next().ok_or(ResolverError::UserNotFound)
}
