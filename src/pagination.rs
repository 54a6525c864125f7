//! Page walking over list endpoints.
//!
//! A [`PageWalker`] repeats fetch, decode, inspect cursor until the server
//! reports no further pages. Fetches are strictly sequential: each one is
//! awaited before the page number is advanced and the next one is issued.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::{decode_page, Candidates, PageContext, PagedEnvelope};
use crate::error::{BooksError, Result};
use crate::filter::{encode, FilterSet, QueryPairs};
use crate::transport::Transport;

/// Default page size for list operations.
pub const DEFAULT_PER_PAGE: u32 = 200;

/// A page of results together with the cursor the server reported for it.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The cursor for this page, absent when the server reported an error.
    pub context: Option<PageContext>,
    /// Application code of the response.
    pub code: i64,
    /// Message of the response.
    pub message: String,
}

impl<T> Page<T> {
    /// Whether the server reported another page.
    pub fn has_more(&self) -> bool {
        self.context.as_ref().is_some_and(|c| c.has_more_page)
    }

    /// Page number reported by the server.
    pub fn number(&self) -> Option<u32> {
        self.context.as_ref().map(|c| c.page)
    }

    /// Returns true if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> From<PagedEnvelope<T>> for Page<T> {
    fn from(paged: PagedEnvelope<T>) -> Self {
        Self {
            context: paged.page_context,
            code: paged.envelope.code,
            message: paged.envelope.message,
            items: paged.envelope.resource.unwrap_or_default(),
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Cooperative cancellation for a page walk.
///
/// Clones share the same flag. The walker checks it before every fetch and
/// stops with [`BooksError::Cancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Boxed future returned by [`fetch_from`].
pub type PageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<PagedEnvelope<T>>> + Send + 'a>>;

/// Adapt a transport into a fetch function: GET `path` with the encoded
/// query, then decode the list envelope against `candidates`.
pub fn fetch_from<'a, T>(
    transport: &'a dyn Transport,
    path: &'a str,
    candidates: &'a Candidates,
) -> impl FnMut(QueryPairs) -> PageFuture<'a, T>
where
    T: DeserializeOwned + Send + 'a,
{
    move |query: QueryPairs| -> PageFuture<'a, T> {
        Box::pin(async move {
            let raw = transport.send(Method::GET, path, &query, None).await?;
            decode_page(raw, candidates)
        })
    }
}

/// Drives a fetch function across pages.
///
/// The fetch function receives the encoded query for the current state of
/// the [`FilterSet`] (organization, filters, `page`, `per_page`) and returns
/// the decoded page. Any error it returns ends the walk immediately and no
/// partial result is returned.
pub struct PageWalker<F> {
    fetch: F,
    cancel: Option<CancelFlag>,
}

impl<F> PageWalker<F> {
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            cancel: None,
        }
    }

    /// Stop between fetches once `flag` is cancelled.
    #[must_use]
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn ensure_not_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.is_cancelled() => Err(BooksError::Cancelled),
            _ => Ok(()),
        }
    }

    async fn fetch_current<T, Fut>(&mut self, filter: &FilterSet) -> Result<PagedEnvelope<T>>
    where
        F: FnMut(QueryPairs) -> Fut,
        Fut: Future<Output = Result<PagedEnvelope<T>>>,
    {
        self.ensure_not_cancelled()?;
        let paged = (self.fetch)(encode(filter)).await?;
        tracing::debug!(
            page = filter.page(),
            items = paged.envelope.resource.as_ref().map_or(0, Vec::len),
            has_more_page = paged.has_more_page(),
            code = paged.envelope.code,
            "fetched page"
        );
        Ok(paged)
    }

    /// Fetch one page and return it with its cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0 or the fetch fails.
    pub async fn fetch_page<T, Fut>(
        &mut self,
        filter: &mut FilterSet,
        page: u32,
        per_page: u32,
    ) -> Result<Page<T>>
    where
        F: FnMut(QueryPairs) -> Fut,
        Fut: Future<Output = Result<PagedEnvelope<T>>>,
    {
        check_page(page, "page")?;
        filter.set_page(page);
        filter.set_per_page(per_page);
        Ok(self.fetch_current(filter).await?.into())
    }

    /// Fetch one page and return its items.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0 or the fetch fails.
    pub async fn get_page<T, Fut>(
        &mut self,
        filter: &mut FilterSet,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<T>>
    where
        F: FnMut(QueryPairs) -> Fut,
        Fut: Future<Output = Result<PagedEnvelope<T>>>,
    {
        Ok(self.fetch_page(filter, page, per_page).await?.items)
    }

    /// Fetch pages `start..=end` and concatenate their items.
    ///
    /// Exactly the pages in the range are fetched, whatever `has_more_page`
    /// says; the walk only ends early on a page without a cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is 0, the walk is cancelled, or any fetch fails.
    pub async fn get_page_range<T, Fut>(
        &mut self,
        filter: &mut FilterSet,
        start: u32,
        end: u32,
        per_page: u32,
    ) -> Result<Vec<T>>
    where
        F: FnMut(QueryPairs) -> Fut,
        Fut: Future<Output = Result<PagedEnvelope<T>>>,
    {
        check_page(start, "start")?;
        filter.set_per_page(per_page);

        let mut items = Vec::new();
        let mut page = start;
        while page <= end {
            filter.set_page(page);
            let paged = self.fetch_current(filter).await?;
            let has_cursor = paged.page_context.is_some();
            items.extend(paged.into_items());
            if !has_cursor {
                break;
            }
            match page.checked_add(1) {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(items)
    }

    /// Fetch every page from the filter's current page (default 1) until the
    /// server reports `has_more_page: false`. That last page is included.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter's page is 0, the walk is cancelled, any
    /// fetch fails, or the server reports more pages after `u32::MAX`.
    pub async fn get_all_pages<T, Fut>(&mut self, filter: &mut FilterSet) -> Result<Vec<T>>
    where
        F: FnMut(QueryPairs) -> Fut,
        Fut: Future<Output = Result<PagedEnvelope<T>>>,
    {
        let mut page = filter.page().unwrap_or(1);
        check_page(page, "page")?;

        let mut items = Vec::new();
        loop {
            filter.set_page(page);
            let paged = self.fetch_current(filter).await?;
            let has_more = paged.has_more_page();
            items.extend(paged.into_items());
            if !has_more {
                break;
            }
            page = page.checked_add(1).ok_or_else(|| {
                BooksError::InvalidArgument(format!("page {page} is the last addressable page"))
            })?;
        }

        Ok(items)
    }
}

fn check_page(page: u32, name: &str) -> Result<()> {
    if page == 0 {
        return Err(BooksError::InvalidArgument(format!(
            "{name} must be at least 1 (pages are 1-indexed)"
        )));
    }
    Ok(())
}
