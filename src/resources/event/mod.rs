//! `/events` API
//!
//! Events record changes to other API objects. The changed object travels
//! untyped in `data.object`; use [`Event::get_obj_value`] for a single field
//! or [`EventData::object_as`] to decode it into a concrete type.

mod client;
mod types;

pub use client::{EventClient, EventIter};
pub use types::{Event, EventData, EventListParams};
