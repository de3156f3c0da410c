//! Framework-agnostic resolver entry points.
//!
//! Each handler takes the event payload, runs its use case and always answers
//! with a well-formed [`ResolverResponse`]. Failures never escape as `Err`;
//! they are logged here and reported in the response body.

pub mod events;
pub mod forgot_password;
pub mod response;
pub mod update_password;

pub use events::{
    ForgotPasswordData, ForgotPasswordEvent, UpdatePasswordData, UpdatePasswordEvent,
};
pub use forgot_password::handle_forgot_password;
pub use response::{ErrorBody, ResolverResponse, ResponseData};
pub use update_password::handle_update_password;

use keyrelay_core::{InputError, OperationResult, ResolverError};

fn report(outcome: Result<(), ResolverError>) -> ResolverResponse {
    if let Err(error) = &outcome {
        tracing::error!(code = error.code(), error = %error, "Resolver failed");
    }

    OperationResult::from(outcome).into()
}

/// Reports an event payload that could not be parsed at all.
///
/// Used by framework layers whose body extractor fails before a handler runs.
pub fn reject_payload(reason: impl Into<String>) -> ResolverResponse {
    report(Err(InputError::MalformedPayload(reason.into()).into()))
}
