//! Event objects and params

use crate::error::{Error, Result};
use crate::pagination::{ListItem, ListParams};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Something that happened to an API object
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub livemode: bool,
    /// Event type, e.g. `charge.succeeded`
    #[serde(rename = "type")]
    pub kind: String,
    /// ID of the API request that caused the event
    #[serde(default)]
    pub request: Option<String>,
    pub data: EventData,
    #[serde(default)]
    pub pending_webhooks: u64,
    #[serde(default)]
    pub api_version: Option<String>,
}

impl Event {
    /// Look up a field of the event's object by key path
    ///
    /// `event.get_obj_value(&["card", "last4"])` reads `data.object.card.last4`.
    /// Returns `None` if a key is missing, if the path runs through something
    /// other than an object, or if the value is `null`. Strings come back
    /// unquoted; numbers and booleans as their JSON text; arrays and objects
    /// as compact JSON.
    pub fn get_obj_value(&self, path: &[&str]) -> Option<String> {
        self.data.get_obj_value(path)
    }

    /// Creation time
    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::types::timestamp(self.created)
    }
}

impl ListItem for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload of an event
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EventData {
    /// The object the event is about, as of the event
    pub object: JsonObject,
    /// Previous values of changed fields (`*.updated` events)
    #[serde(default)]
    pub previous_attributes: Option<JsonObject>,
}

impl EventData {
    /// See [`Event::get_obj_value`]
    pub fn get_obj_value(&self, path: &[&str]) -> Option<String> {
        let (first, rest) = path.split_first()?;
        let mut current = self.object.get(*first)?;

        for key in rest {
            match current {
                JsonValue::Object(map) => current = map.get(*key)?,
                _ => return None,
            }
        }

        match current {
            JsonValue::Null => None,
            JsonValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Decode the object into a concrete type
    ///
    /// A shape mismatch is reported as [`Error::Decode`] naming the object type.
    pub fn object_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(JsonValue::Object(self.object.clone())).map_err(|e| {
            Error::decode(format!(
                "{} object: {e}",
                self.object_type().unwrap_or("event")
            ))
        })
    }

    /// The object's `object` field, e.g. `charge`
    pub fn object_type(&self) -> Option<&str> {
        self.object.get("object").and_then(JsonValue::as_str)
    }
}

/// Params for listing events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListParams {
    pub list: ListParams,
    /// Event type, wildcards allowed (`charge.*`)
    pub kind: Option<String>,
    /// Exact creation timestamp; use `list.filters` for ranges
    pub created: Option<i64>,
}
