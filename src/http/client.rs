//! reqwest-backed transport
//!
//! Handles:
//! - URL building against the configured API root
//! - Form encoding into the query string or request body
//! - Basic auth with the secret key
//! - Error classification into API errors and raw HTTP errors

use super::backend::Backend;
use crate::config::ClientConfig;
use crate::error::{ApiErrorEnvelope, Error, Result};
use crate::params::Form;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const VERSION_HEADER: &str = "Stripe-Version";

/// HTTP transport talking to the live API
pub struct HttpBackend {
    client: Client,
    base_url: String,
    api_version: Option<String>,
    timeout: Duration,
}

impl HttpBackend {
    /// Create a backend from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a backend around an existing reqwest client
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_version: config.api_version.clone(),
            timeout: config.timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }

        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(
        &self,
        method: Method,
        path: &str,
        key: &str,
        form: Option<&Form>,
    ) -> Result<JsonValue> {
        let mut url = self.build_url(path)?;
        let form = form.filter(|f| !f.is_empty());

        if !method.has_body() {
            if let Some(form) = form {
                url.query_pairs_mut().extend_pairs(form.iter());
            }
        }

        debug!("{} {}", method, url.path());

        let mut req = self
            .client
            .request(method.into(), url)
            .basic_auth(key, None::<&str>)
            .timeout(self.timeout);

        if let Some(version) = &self.api_version {
            req = req.header(VERSION_HEADER, version.as_str());
        }

        if method.has_body() {
            let body = form.map(Form::encode).unwrap_or_default();
            req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        let response = req.send().await?;
        parse_response(method, path, response).await
    }
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Turn a response into JSON or a classified error
async fn parse_response(method: Method, path: &str, response: Response) -> Result<JsonValue> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        debug!("Request succeeded: {} {} ({})", method, path, status.as_u16());
        if body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        return Ok(serde_json::from_str(&body)?);
    }

    warn!("Request failed: {} {} ({})", method, path, status.as_u16());

    match serde_json::from_str::<ApiErrorEnvelope>(&body) {
        Ok(envelope) => Err(Error::Api {
            status: status.as_u16(),
            error: envelope.error,
        }),
        Err(_) => Err(Error::http_status(status.as_u16(), body)),
    }
}
