mod helpers;
mod resolver_service;
mod tracing;

pub use helpers::{ResolverClients, ServiceBuildError, build_clients, build_http_client};
pub use resolver_service::ResolverService;
