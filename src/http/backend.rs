//! Backend trait

use crate::error::Result;
use crate::params::Form;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;

/// Transport capability used by every resource
///
/// `form` is sent as the query string for GET/DELETE and as the request body
/// for POST. Implementations return the decoded JSON body of a successful
/// response and map anything else to an [`Error`](crate::Error).
#[async_trait]
pub trait Backend: Send + Sync {
    async fn call(
        &self,
        method: Method,
        path: &str,
        key: &str,
        form: Option<&Form>,
    ) -> Result<JsonValue>;
}
