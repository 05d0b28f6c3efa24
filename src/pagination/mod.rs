//! Pagination module
//!
//! Supports: cursor (`starting_after` / `ending_before`) and offset paging
//!
//! # Overview
//!
//! List endpoints return one page at a time. [`Iter`] hides the page
//! bookkeeping: it holds the current page in memory, fetches the next page on
//! demand when the current one is drained, and stops when the API reports no
//! more pages, when only a single page was requested, or when a fetch fails.
//!
//! ```rust,ignore
//! let mut iter = client.recipients().list(None).await;
//! while !iter.stop() {
//!     if let Some(recipient) = iter.next().await? {
//!         println!("{}", recipient.id);
//!     }
//! }
//! ```

mod fetcher;
mod iter;
mod types;

pub use fetcher::{from_fn, BackendFetcher, FnFetcher, PageFetcher};
pub use iter::Iter;
pub use types::{CursorStrategy, Filter, Filters, ListItem, ListMeta, ListParams, ListResponse};
