//! Event operations

use super::types::{Event, EventListParams};
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{CursorStrategy, Iter};
use crate::params::Form;
use crate::types::Method;

const PATH: &str = "/events";

/// Iterator over events
pub type EventIter = Iter<Event>;

/// Client for `/events`
#[derive(Debug, Clone)]
pub struct EventClient {
    client: Client,
}

impl EventClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Retrieve an event
    pub async fn get(&self, id: &str) -> Result<Event> {
        self.client
            .call_json(Method::GET, &format!("{PATH}/{id}"), None)
            .await
    }

    /// List events, newest first
    pub async fn list(&self, params: Option<&EventListParams>) -> EventIter {
        let mut form = Form::new();
        if let Some(p) = params {
            if let Some(kind) = &p.kind {
                form.add("type", kind.as_str());
            }
            if let Some(created) = p.created {
                form.add("created", created.to_string());
            }
        }

        let list = params.map(|p| p.list.clone());
        let strategy = list
            .as_ref()
            .map(CursorStrategy::for_params)
            .unwrap_or_default();

        Iter::new(list, form, strategy, self.client.fetcher::<Event>(PATH)).await
    }
}
