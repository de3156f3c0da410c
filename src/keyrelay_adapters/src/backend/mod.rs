pub mod graphql_backend_client;

pub use graphql_backend_client::GraphQlBackendClient;
