use keyrelay_core::{BackendApi, BackendApiError, BackendUser, Email, SessionContext};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Backend API client executing queries with the caller's session token.
#[derive(Clone)]
pub struct GraphQlBackendClient {
    http_client: Client,
    endpoint: Url,
}

impl GraphQlBackendClient {
    pub fn new(endpoint: Url, http_client: Client) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }
}

#[async_trait::async_trait]
impl BackendApi for GraphQlBackendClient {
    #[tracing::instrument(
        name = "Resolving session user",
        skip_all,
        fields(authenticated = session.token().is_some())
    )]
    async fn current_user(
        &self,
        session: &SessionContext,
    ) -> Result<Option<BackendUser>, BackendApiError> {
        let mut request = self
            .http_client
            .post(self.endpoint.clone())
            .json(&GraphQlRequest {
                query: CURRENT_USER_QUERY,
            });

        if let Some(token) = session.token() {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendApiError::UnexpectedStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: GraphQlResponse<CurrentUserData> = response
            .json()
            .await
            .map_err(|e| BackendApiError::Decode(e.to_string()))?;

        if !body.errors.is_empty() {
            return Err(BackendApiError::GraphQl(
                body.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        body.data
            .and_then(|data| data.user)
            .map(BackendUser::try_from)
            .transpose()
    }
}

const CURRENT_USER_QUERY: &str = r#"
  query GetUser {
    user {
      id
      email
    }
  }
"#;

#[derive(Serialize, Debug)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct CurrentUserData {
    user: Option<UserRecord>,
}

#[derive(Deserialize)]
struct UserRecord {
    id: String,
    email: Option<String>,
}

impl TryFrom<UserRecord> for BackendUser {
    type Error = BackendApiError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let email = record
            .email
            .ok_or_else(|| BackendApiError::Decode("user has no email".into()))
            .and_then(|email| {
                Email::try_from(Secret::new(email))
                    .map_err(|e| BackendApiError::Decode(e.to_string()))
            })?;

        Ok(BackendUser::new(record.id, email))
    }
}
