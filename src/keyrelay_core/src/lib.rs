pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    backend_user::BackendUser, connection::Connection, email::Email,
    identity_account::IdentityAccount, identity_key::IdentityKey, input_error::InputError,
    operation_result::OperationResult, password::Password, session::SessionContext,
};

pub use error::{BackendApiError, IdentityProviderError, ResolverError, SessionResolutionError};

pub use ports::{
    backend_api::BackendApi,
    identity_provider::{IdentityAuthentication, IdentityManagement},
};
