use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::core::session::SessionStore;
use crate::error::StudieHubError;
use crate::http::auth_middleware::AuthHeaderMiddleware;
use crate::http::request_log_middleware::RequestLogMiddleware;
use crate::model::api_response::ApiResponse;
use crate::model::user::{AuthData, User};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the StudieHub REST API. Resource calls live in the sibling
/// modules as further `impl StudieHub` blocks.
pub struct StudieHub {
    client: ClientWithMiddleware,
    config: Config,
    session: Arc<RwLock<SessionStore>>,
}

impl StudieHub {
    pub fn new(config: Config) -> Result<Self, StudieHubError> {
        let store = SessionStore::load(&config.session_path);
        Self::with_session(config, store)
    }

    pub fn with_session(config: Config, store: SessionStore) -> Result<Self, StudieHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("studiehub/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let session = Arc::new(RwLock::new(store));
        let token_session = Arc::clone(&session);
        let client = ClientBuilder::new(http)
            .with(RequestLogMiddleware)
            .with(AuthHeaderMiddleware {
                token_fn: Arc::new(move || {
                    token_session
                        .read()
                        .unwrap_or_else(PoisonError::into_inner)
                        .token()
                        .map(str::to_string)
                }),
            })
            .build();

        Ok(StudieHub {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_session().current_user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.write_session().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.read_session().is_admin()
    }

    pub fn require_authenticated(&self) -> Result<User, StudieHubError> {
        self.write_session().require_authenticated()
    }

    pub fn require_admin(&self) -> Result<User, StudieHubError> {
        self.write_session().require_admin()
    }

    pub fn logout(&self) -> Result<(), StudieHubError> {
        log::info!("Signing out");
        self.write_session().clear()
    }

    pub(crate) fn store_auth(&self, auth: AuthData) -> Result<User, StudieHubError> {
        let user = auth.user.clone();
        self.write_session().set(auth)?;
        Ok(user)
    }

    pub(crate) fn write_session(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_session(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, StudieHubError> {
        let url = self.config.endpoint(segments)?;
        self.send(self.client.get(url).query(query)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse<T>, StudieHubError> {
        let url = self.config.endpoint(segments)?;
        self.send(self.client.post(url).json(body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse<T>, StudieHubError> {
        let url = self.config.endpoint(segments)?;
        self.send(self.client.put(url).json(body)).await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, StudieHubError> {
        let url = self.config.endpoint(segments)?;
        let request = self
            .client
            .patch(url)
            .query(query)
            .json(&serde_json::json!({}));
        self.send(request).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<ApiResponse<T>, StudieHubError> {
        let url = self.config.endpoint(segments)?;
        self.send(self.client.delete(url)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, StudieHubError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        parse_envelope(status, &body)
    }
}

/// Unwraps the `{success, message, data, statusCode}` envelope. Transport
/// errors, non-2xx statuses and `success: false` all become errors carrying
/// the backend message (empty when the backend sent none).
pub(crate) fn parse_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<ApiResponse<T>, StudieHubError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
            .map(|envelope| envelope.message)
            .unwrap_or_default();
        return Err(StudieHubError::api(status, &message));
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(body)?;
    if !envelope.success {
        let status = envelope
            .status_code
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(status);
        return Err(StudieHubError::api(status, &envelope.message));
    }
    Ok(envelope)
}
