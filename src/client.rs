//! API client
//!
//! [`Client`] bundles a [`Backend`] and the secret key. Resource clients are
//! obtained from it and share both.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{Backend, HttpBackend};
use crate::pagination::BackendFetcher;
use crate::params::Form;
use crate::resources::event::EventClient;
use crate::resources::recipient::RecipientClient;
use crate::types::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Entry point for every API call
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    key: String,
}

impl Client {
    /// Create a client talking HTTP to the configured API root
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let backend = HttpBackend::new(&config)?;
        Ok(Self {
            backend: Arc::new(backend),
            key: config.api_key,
        })
    }

    /// Create a client from `STRIPE_KEY` / `STRIPE_API_BASE`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over a custom backend
    pub fn with_backend(key: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// `/recipients`
    pub fn recipients(&self) -> RecipientClient {
        RecipientClient::new(self.clone())
    }

    /// `/events`
    pub fn events(&self) -> EventClient {
        EventClient::new(self.clone())
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// Make a call and decode the JSON response
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Option<&Form>,
    ) -> Result<T> {
        let body = self.backend.call(method, path, &self.key, form).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Page fetcher for a list endpoint
    pub fn fetcher<T>(&self, path: impl Into<String>) -> BackendFetcher<T> {
        BackendFetcher::new(Arc::clone(&self.backend), self.key.clone(), path)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
