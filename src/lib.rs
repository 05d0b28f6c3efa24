// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # stripe-client
//!
//! Typed async client for a Stripe-style payments REST API.
//!
//! ## Features
//!
//! - **Typed resources**: recipients and events, with typed params and objects
//! - **Form encoding**: params become `application/x-www-form-urlencoded` fields
//! - **Lazy pagination**: [`Iter`] walks list endpoints page by page, on demand
//! - **Pluggable transport**: any [`Backend`] can stand in for the HTTP one
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stripe_client::{Client, ClientConfig, Result};
//! use stripe_client::resources::event::EventListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::builder().api_key("sk_test_...").build()?)?;
//!
//!     let params = EventListParams {
//!         kind: Some("charge.*".to_string()),
//!         ..Default::default()
//!     };
//!     let mut events = client.events().list(Some(&params)).await;
//!     while !events.stop() {
//!         if let Some(event) = events.next().await? {
//!             println!("{} {}", event.id, event.kind);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Client  →  recipients() / events()                      │
//! └──────────────────────────────────────────────────────────┘
//!          │ params → Form               │ list → Iter<T>
//! ┌────────┴─────────┬───────────────────┴──────────────────┐
//! │     Backend      │           PageFetcher                │
//! │ call(method,     │  fetch(form) → ListResponse<T>       │
//! │  path, key, form)│  cursor: starting_after / offset     │
//! └──────────────────┴──────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Request parameter encoding
pub mod params;

/// HTTP transport
pub mod http;

/// List parameters and the paginated iterator
pub mod pagination;

/// API client
pub mod client;

/// API resources
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{Backend, HttpBackend};
pub use pagination::{Iter, ListMeta, ListParams};
pub use params::{Form, Params};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
