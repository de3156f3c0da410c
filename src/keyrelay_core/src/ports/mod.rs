pub mod backend_api;
pub mod identity_provider;
