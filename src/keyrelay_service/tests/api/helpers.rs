use keyrelay_adapters::{
    config::{AllowedOrigins, ApplicationSettings, Auth0Settings, BackendSettings, Settings, test},
    handlers::ResolverResponse,
};
use keyrelay_service::{ResolverService, build_clients};
use secrecy::Secret;
use tokio::net::TcpListener;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const CLIENT_ID: &str = "spa-client";
pub const MANAGEMENT_TOKEN: &str = "mgmt-token";
pub const DATABASE_CONNECTION: &str = "Username-Password-Authentication";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub auth0_server: MockServer,
    pub backend_server: MockServer,
}

impl TestApp {
    pub async fn post_forgot_password(&self, body: &serde_json::Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/userForgotPassword", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_update_password(
        &self,
        body: &serde_json::Value,
        session_token: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/userUpdatePassword", self.address))
            .json(body);
        if let Some(token) = session_token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    /// Posts a body that is sent verbatim, for payloads that are not valid JSON.
    pub async fn post_raw(&self, route: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/{route}", self.address))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health_check", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Requests the identity provider received, excluding token exchanges.
    pub async fn identity_requests(&self) -> Vec<wiremock::Request> {
        self.auth0_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() != "/oauth/token")
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    let auth0_server = MockServer::start().await;
    let backend_server = MockServer::start().await;

    mount_token_endpoint(&auth0_server).await;

    let settings = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: AllowedOrigins::default(),
        },
        auth0: Auth0Settings {
            base_url: auth0_server.uri(),
            client_id: CLIENT_ID.to_string(),
            client_secret: Secret::new("client-secret".to_string()),
            audience: None,
            management_token: None,
            timeout_millis: test::TIMEOUT.as_millis() as u64,
        },
        backend: BackendSettings {
            graphql_url: format!("{}/graphql", backend_server.uri()),
            timeout_millis: test::TIMEOUT.as_millis() as u64,
        },
    };

    let clients = build_clients(&settings).expect("Failed to build clients");
    let service = ResolverService::from_clients(clients);

    let listener = TcpListener::bind(test::APP_ADDRESS)
        .await
        .expect("Failed to bind listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(service.run_standalone(listener, settings.application.allowed_origins));

    TestApp {
        address,
        http_client: reqwest::Client::new(),
        auth0_server,
        backend_server,
    }
}

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": MANAGEMENT_TOKEN,
            "expires_in": 86400,
            "token_type": "Bearer"
        })))
        .named("management token")
        .mount(server)
        .await;
}

pub fn identity_user(email: &str, provider: &str, user_id: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "user_id": format!("{provider}|{user_id}"),
        "identities": [{
            "provider": provider,
            "user_id": user_id,
            "connection": DATABASE_CONNECTION,
            "isSocial": false
        }]
    })
}

pub async fn assert_failure(response: reqwest::Response, code: &str) {
    assert_eq!(response.status().as_u16(), 200);
    let body: ResolverResponse = response.json().await.expect("Invalid response body");
    assert!(!body.data.success);
    assert_eq!(body.errors.len(), 1, "exactly one error expected");
    assert_eq!(body.errors[0].code, code);
}

pub async fn assert_success(response: reqwest::Response) {
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Invalid response body");
    assert_eq!(body, serde_json::json!({ "data": { "success": true } }));
}
