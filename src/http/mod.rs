//! Shared request client for the tracker backend.
//!
//! Every call goes to one fixed origin with JSON headers and a cookie jar, so
//! the session cookie set by `/api/auth/login` rides along on later requests.
//! Failures are logged here and handed back untouched; nothing is retried.

mod envelope;

pub use envelope::Envelope;

use anyhow::Context;
use once_cell::sync::OnceCell;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::{config::ClientConfig, error::ApiError};

static SHARED: OnceCell<ApiClient> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(agent) = &config.user_agent {
            headers.insert(
                USER_AGENT,
                HeaderValue::from_str(agent).context("invalid user agent")?,
            );
        }

        let http = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// Installs the process-wide client. Later calls return the first instance.
    pub fn install(config: &ClientConfig) -> anyhow::Result<&'static ApiClient> {
        SHARED.get_or_try_init(|| Self::new(config))
    }

    /// The process-wide client, configured from the environment on first use.
    pub fn shared() -> anyhow::Result<&'static ApiClient> {
        SHARED.get_or_try_init(|| Self::new(&ClientConfig::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(self.request(Method::POST, path)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "api request");
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    // Response "interceptor": observe, log, hand the outcome back as-is.
    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<Envelope<T>, ApiError> {
        let response = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "network error: unable to connect to server");
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                error!(error = %e, %status, "failed to read response body");
                return Err(ApiError::Transport(e));
            }
        };

        if !status.is_success() {
            let envelope = serde_json::from_slice::<Envelope<Value>>(&body).ok();
            let message = envelope
                .as_ref()
                .and_then(|env| env.message.as_deref().or(env.error.as_deref()))
                .unwrap_or("An error occurred");
            error!(%status, server_message = message, "api error");
            return Err(ApiError::Status { status, envelope });
        }

        serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| {
            error!(error = %e, %status, "unexpected response shape");
            ApiError::Decode(e.to_string())
        })
    }
}

/// Percent-encodes a caller-supplied id for use as one path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
