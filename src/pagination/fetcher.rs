//! Page fetch capability
//!
//! [`Iter`](super::Iter) only knows how to ask for "the page described by
//! this form". A [`PageFetcher`] performs that round trip: usually a GET
//! through a [`Backend`], or any async closure via [`from_fn`].

use super::types::ListResponse;
use crate::error::Result;
use crate::http::Backend;
use crate::params::Form;
use crate::types::Method;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Fetches one page of a list endpoint
#[async_trait]
pub trait PageFetcher<T: Send>: Send + Sync {
    async fn fetch(&self, form: Form) -> Result<ListResponse<T>>;
}

// ============================================================================
// Backend Fetcher
// ============================================================================

/// Lists a resource path through a [`Backend`]
pub struct BackendFetcher<T> {
    backend: Arc<dyn Backend>,
    key: String,
    path: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> BackendFetcher<T> {
    pub fn new(backend: Arc<dyn Backend>, key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            path: path.into(),
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T> PageFetcher<T> for BackendFetcher<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, form: Form) -> Result<ListResponse<T>> {
        let body = self
            .backend
            .call(Method::GET, &self.path, &self.key, Some(&form))
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}

impl<T> std::fmt::Debug for BackendFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendFetcher")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Closure Fetcher
// ============================================================================

/// Fetcher backed by an async closure
pub struct FnFetcher<F> {
    f: F,
}

/// Wrap an async closure `Fn(Form) -> Future<Output = Result<ListResponse<T>>>`
pub fn from_fn<F>(f: F) -> FnFetcher<F> {
    FnFetcher { f }
}

#[async_trait]
impl<T, F, Fut> PageFetcher<T> for FnFetcher<F>
where
    T: Send + 'static,
    F: Fn(Form) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ListResponse<T>>> + Send,
{
    async fn fetch(&self, form: Form) -> Result<ListResponse<T>> {
        (self.f)(form).await
    }
}
