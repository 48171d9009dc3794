//! MedTrack API client implementation

use std::time::Duration;

use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::events::EventBus;
use super::interceptor::{Location, ResponseInterceptor};
use crate::error::{ApiError, Result};
use crate::session::CredentialStore;

/// Request timeout applied to every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of an outbound request
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// Serialize any request record as a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }
}

/// Per-request options
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// Extra headers
    pub headers: Vec<(String, String)>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Successful (2xx) response, body already read
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }

    /// Body as plain text
    pub fn text(&self) -> &str {
        &self.body
    }
}

/// MedTrack API client.
///
/// Attaches the stored bearer credential to every request and routes every
/// response through the [`ResponseInterceptor`].
#[derive(Clone)]
pub struct MedTrackClient {
    http: HttpClient,
    base_url: String,
    credentials: CredentialStore,
    location: Location,
    interceptor: ResponseInterceptor,
}

impl MedTrackClient {
    /// Create a client for `base_url` publishing failures on `events`
    pub fn new(
        base_url: impl Into<String>,
        credentials: CredentialStore,
        events: EventBus,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let location = Location::default();
        let interceptor =
            ResponseInterceptor::new(credentials.clone(), events, location.clone());

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            location,
            interceptor,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Tell the client which location the shell is showing
    pub fn set_location(&self, location: impl Into<String>) {
        self.location.set(location);
    }

    pub fn location(&self) -> String {
        self.location.get()
    }

    /// Issue a request against the API.
    ///
    /// The stored credential, if any, is sent as a bearer token. Non-2xx
    /// responses and transport errors are classified by the interceptor and
    /// returned as `Err`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        config: Option<RequestConfig>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut builder = self.http.request(method.clone(), &url);

        if let Some(token) = self.credentials.lookup() {
            builder = builder.bearer_auth(token);
        }

        if let Some(config) = config {
            if !config.query.is_empty() {
                builder = builder.query(&config.query);
            }
            for (name, value) in &config.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder = match body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| self.interceptor.transport_failure(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.interceptor.transport_failure(e))?;

        log::debug!("{} {} -> {}", method, url, status);
        self.interceptor.intercept(status, &body)?;

        Ok(ApiResponse { status, body })
    }

    /// GET and decode a JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None, None).await?.json()
    }

    /// GET with query parameters and decode a JSON body
    pub(crate) async fn get_json_with<T: DeserializeOwned>(
        &self,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request(Method::GET, path, None, Some(config))
            .await?
            .json()
    }

    /// Send a JSON body and decode the JSON response
    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(method, path, Some(RequestBody::json(body)?), None)
            .await?
            .json()
    }

    /// Send a request without a body, ignoring whatever comes back
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        self.request(method, path, None, None).await?;
        Ok(())
    }
}
