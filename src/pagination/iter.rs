//! Lazy iterator over a paginated list endpoint

use super::fetcher::PageFetcher;
use super::types::{CursorStrategy, ListItem, ListMeta, ListParams};
use crate::error::{Error, Result};
use crate::params::Form;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pull-based iterator over every item of a list endpoint
///
/// The first page is fetched when the iterator is created. Later pages are
/// fetched one at a time, only once the current page has been drained by
/// [`next`](Self::next). Items come out in the order the API returned them.
///
/// A failed fetch ends the iteration: the error is returned by `next` and
/// again by every later call, and no further request is made.
pub struct Iter<T: Send> {
    fetcher: Box<dyn PageFetcher<T>>,
    strategy: CursorStrategy,
    /// Form sent with every page request; the cursor field is rewritten per page
    form: Form,
    single: bool,
    page: VecDeque<T>,
    meta: ListMeta,
    /// Cursor taken from the last completed page
    cursor: Option<String>,
    /// Offset of the next unfetched item
    fetched: u64,
    pages: usize,
    err: Option<Arc<Error>>,
    err_reported: bool,
}

impl<T> Iter<T>
where
    T: ListItem + Send + 'static,
{
    /// Create an iterator and fetch the first page
    ///
    /// `form` holds the resource-specific filters; the list params are
    /// appended to it. `None` params means default paging.
    pub async fn new(
        params: Option<ListParams>,
        mut form: Form,
        strategy: CursorStrategy,
        fetcher: impl PageFetcher<T> + 'static,
    ) -> Self {
        let params = params.unwrap_or_default();
        params.append_to(&mut form);
        let start = strategy.start_position(&form);

        let mut iter = Self {
            fetcher: Box::new(fetcher),
            strategy,
            form,
            single: params.single,
            page: VecDeque::new(),
            meta: ListMeta::default(),
            cursor: None,
            fetched: start,
            pages: 0,
            err: None,
            err_reported: false,
        };

        iter.fetch_page().await;
        iter
    }

    /// Next item, fetching the next page if the current one is drained
    ///
    /// Returns `Ok(None)` once the list is exhausted; that call makes no
    /// request. After a fetch failure every call returns
    /// [`Error::FetchFailed`] wrapping the same cause.
    pub async fn next(&mut self) -> Result<Option<T>> {
        if let Some(err) = self.sticky_error() {
            return Err(err);
        }

        if self.page.is_empty() && self.wants_next_page() {
            if let Some(cursor) = self.cursor.clone() {
                self.strategy.apply(&mut self.form, &cursor);
            }
            self.fetch_page().await;

            if let Some(err) = self.sticky_error() {
                return Err(err);
            }
        }

        Ok(self.page.pop_front())
    }

    /// Whether iteration is over
    ///
    /// True when the current page is drained and no further page will be
    /// fetched, or when a fetch failed and `next` has already reported it.
    /// A failure of the very first fetch keeps this false until `next` has
    /// returned the error once.
    pub fn stop(&self) -> bool {
        if self.err.is_some() {
            return self.err_reported;
        }
        self.page.is_empty() && !self.wants_next_page()
    }

    /// Metadata of the most recently completed page fetch
    pub fn meta(&self) -> &ListMeta {
        &self.meta
    }

    /// Number of page requests made so far, including failed ones
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// Items still buffered from the current page
    pub fn buffered(&self) -> usize {
        self.page.len()
    }

    /// Consume the iterator as a stream
    ///
    /// Yields every item, then the fetch error if one occurs, then ends.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::unfold(self, |mut iter| async move {
            if iter.stop() {
                return None;
            }
            match iter.next().await {
                Ok(Some(item)) => Some((Ok(item), iter)),
                Ok(None) => None,
                Err(err) => Some((Err(err), iter)),
            }
        })
    }

    fn wants_next_page(&self) -> bool {
        !self.single && self.meta.has_more && self.cursor.is_some()
    }

    fn sticky_error(&mut self) -> Option<Error> {
        let err = self.err.as_ref()?;
        self.err_reported = true;
        Some(Error::FetchFailed(Arc::clone(err)))
    }

    async fn fetch_page(&mut self) {
        self.pages += 1;

        match self.fetcher.fetch(self.form.clone()).await {
            Ok(response) => {
                self.fetched += response.data.len() as u64;
                self.cursor = self.strategy.cursor_of(&response.data, self.fetched);

                debug!(
                    "Fetched page {} ({} items, has_more={})",
                    self.pages,
                    response.data.len(),
                    response.meta.has_more
                );
                if response.meta.has_more && self.cursor.is_none() {
                    warn!("List page reported has_more but returned no items; stopping");
                }

                self.meta = response.meta;
                self.page = response.data.into();
            }
            Err(err) => {
                warn!("List page fetch failed: {err}");
                self.err = Some(Arc::new(err));
            }
        }
    }
}

impl<T: Send> std::fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("strategy", &self.strategy)
            .field("single", &self.single)
            .field("buffered", &self.page.len())
            .field("meta", &self.meta)
            .field("pages", &self.pages)
            .field("failed", &self.err.is_some())
            .finish_non_exhaustive()
    }
}
