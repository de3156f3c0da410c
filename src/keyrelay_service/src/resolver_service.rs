use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use keyrelay_adapters::config::AllowedOrigins;
use keyrelay_axum::routes::{health_check, user_forgot_password, user_update_password};
use keyrelay_core::{BackendApi, IdentityAuthentication, IdentityManagement};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    helpers::ResolverClients,
    tracing::{make_span_with_request_id, on_request, on_response},
};

/// HTTP host for the password resolvers
pub struct ResolverService {
    router: Router,
}

impl ResolverService {
    /// Create a ResolverService from explicit client handles
    ///
    /// # Arguments
    /// * `management` - Identity-provider management API client (must be Clone)
    /// * `authentication` - Identity-provider authentication API client (must be Clone)
    /// * `backend` - Backend API client (must be Clone)
    ///
    /// Each route only receives the clients its flow uses.
    pub fn new<M, A, B>(management: M, authentication: A, backend: B) -> Self
    where
        M: IdentityManagement + Clone + 'static,
        A: IdentityAuthentication + Clone + 'static,
        B: BackendApi + Clone + 'static,
    {
        let router = Router::new()
            .route("/health_check", get(health_check))
            // Forgot password needs both identity-provider APIs
            .route("/userForgotPassword", post(user_forgot_password::<M, A>))
            .with_state((management.clone(), authentication))
            // Update password needs the backend and the management API
            .route("/userUpdatePassword", post(user_update_password::<B, M>))
            .with_state((backend, management));

        Self { router }
    }

    pub fn from_clients(clients: ResolverClients) -> Self {
        Self::new(clients.management, clients.authentication, clients.backend)
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the ResolverService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Browser origins allowed to call the resolvers; no
    ///   CORS layer is added when empty
    pub fn as_nested_router(mut self, allowed_origins: AllowedOrigins) -> Router {
        if !allowed_origins.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                ])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .map(|origin| allowed_origins.contains(origin))
                            .unwrap_or(false)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the resolvers as a standalone server until the listener fails
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: AllowedOrigins,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Resolver service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
