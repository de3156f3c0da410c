//! Axum-specific resolver routes.
//!
//! These routes use Axum's extractors to get the event payload and session,
//! call the framework-agnostic handlers and return the result as JSON.

pub mod health_check;
pub mod user_forgot_password;
pub mod user_update_password;

pub use health_check::health_check;
pub use user_forgot_password::user_forgot_password;
pub use user_update_password::user_update_password;
