//! Axum integration for the keyrelay resolvers.
//!
//! Routes extract the event payload and the caller session, hand them to the
//! framework-agnostic handlers in `keyrelay_adapters` and serialize the
//! uniform result.
//!
//! # Usage
//!
//! ```ignore
//! use keyrelay_axum::routes;
//!
//! let app = Router::new()
//!     .route("/userForgotPassword", post(routes::user_forgot_password::<M, A>))
//!     .with_state((management, authentication));
//! ```

pub mod extract;
pub mod routes;

pub use extract::Session;
