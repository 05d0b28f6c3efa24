//! Common types used throughout the client
//!
//! Shared type definitions and small helpers used by several modules.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Metadata attached to API objects
pub type Metadata = HashMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    DELETE,
}

impl Method {
    /// Whether parameters travel in the request body rather than the query string
    pub fn has_body(self) -> bool {
        matches!(self, Method::POST)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::DELETE => "DELETE",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Expandable Fields
// ============================================================================

/// A field that is either an object ID or, when expanded, the object itself
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// The expanded object, if present
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(obj) => Some(obj),
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }
}

impl<T: crate::pagination::ListItem> Expandable<T> {
    /// The object ID, whether or not the field was expanded
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(obj) => obj.id(),
        }
    }
}

// ============================================================================
// Deleted Objects
// ============================================================================

/// Response body of a DELETE call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Deleted {
    pub id: String,
    #[serde(default)]
    pub deleted: bool,
}

// ============================================================================
// Timestamps
// ============================================================================

/// Convert a Unix timestamp (seconds) as sent by the API into a UTC datetime
pub fn timestamp(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Thing {
        id: String,
    }

    impl crate::pagination::ListItem for Thing {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_expandable_id() {
        let field: Expandable<Thing> = serde_json::from_str(r#""card_123""#).unwrap();
        assert!(!field.is_expanded());
        assert_eq!(field.id(), "card_123");
        assert!(field.as_object().is_none());
    }

    #[test]
    fn test_expandable_object() {
        let field: Expandable<Thing> = serde_json::from_str(r#"{"id": "card_456"}"#).unwrap();
        assert!(field.is_expanded());
        assert_eq!(field.id(), "card_456");
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::DELETE), reqwest::Method::DELETE);
        assert!(Method::POST.has_body());
        assert!(!Method::GET.has_body());
        assert_eq!(Method::GET.to_string(), "GET");
    }

    #[test]
    fn test_timestamp() {
        let dt = timestamp(1_400_000_000).unwrap();
        assert_eq!(dt.to_rfc3339(), "2014-05-13T16:53:20+00:00");
    }
}
