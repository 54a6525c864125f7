//! List trait for fetching collections of entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::Resource;
use crate::envelope::Candidates;
use crate::error::Result;
use crate::filter::{FilterSet, QueryFilter, QueryPairs};
use crate::pagination::{
    fetch_from, CancelFlag, Page, PageFuture, PageWalker, DEFAULT_PER_PAGE,
};
use crate::transport::Transport;

/// Like [`fetch_from`], but a page with a non-zero code fails the walk.
fn checked_fetch<'a, T>(
    client: &'a dyn Transport,
    path: &'a str,
    keys: &'a Candidates,
) -> impl FnMut(QueryPairs) -> PageFuture<'a, T>
where
    T: DeserializeOwned + Send + 'a,
{
    let mut fetch = fetch_from::<T>(client, path, keys);
    move |query: QueryPairs| -> PageFuture<'a, T> {
        let page = fetch(query);
        Box::pin(async move { page.await?.check() })
    }
}

/// List/filter entities with pagination support.
///
/// Every method builds a fresh [`FilterSet`] for the client's organization,
/// applies the typed filter to it, and hands it to a [`PageWalker`].
///
/// # Example
///
/// ```ignore
/// use zohobooks::{BooksClient, Contact, ContactsFilter, Condition, List};
///
/// let client = BooksClient::from_env()?;
///
/// // Fetch a single page
/// let page = Contact::list_page(&client, &Default::default(), 1, 50).await?;
///
/// // Fetch all pages
/// let filter = ContactsFilter {
///     contact_name: Some(Condition::starts_with("Bow")),
///     ..Default::default()
/// };
/// let all_contacts = Contact::list_all(&client, &filter).await?;
/// ```
#[async_trait]
pub trait List: Resource {
    /// Typed query filter for this entity.
    type Filter: QueryFilter + Default + Send + Sync;

    /// Build the filter set a list call starts from.
    ///
    /// # Errors
    ///
    /// Returns an error if the typed filter cannot be applied.
    fn filter_set(client: &dyn Transport, filter: &Self::Filter) -> Result<FilterSet> {
        let mut set = client.filter_set();
        filter.apply(&mut set)?;
        Ok(set)
    }

    /// List one page of entities matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0, the request fails, or the service
    /// reports an error code.
    #[tracing::instrument(skip(client, filter), fields(resource = Self::NAME))]
    async fn list_page(
        client: &dyn Transport,
        filter: &Self::Filter,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Self>> {
        let mut set = Self::filter_set(client, filter)?;
        let keys = Self::KEYS;
        let mut walker = PageWalker::new(checked_fetch::<Self>(client, Self::PATH, &keys));
        walker.fetch_page(&mut set, page, per_page).await
    }

    /// List pages `start..=end` and concatenate them.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is 0 or any page request fails.
    #[tracing::instrument(skip(client, filter), fields(resource = Self::NAME))]
    async fn list_range(
        client: &dyn Transport,
        filter: &Self::Filter,
        start: u32,
        end: u32,
        per_page: u32,
    ) -> Result<Vec<Self>> {
        let mut set = Self::filter_set(client, filter)?;
        let keys = Self::KEYS;
        let mut walker = PageWalker::new(checked_fetch::<Self>(client, Self::PATH, &keys));
        walker.get_page_range(&mut set, start, end, per_page).await
    }

    /// List all entities matching the filter (fetches all pages).
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &dyn Transport, filter: &Self::Filter) -> Result<Vec<Self>> {
        Self::list_all_cancellable(client, filter, CancelFlag::new()).await
    }

    /// List all entities, stopping between pages once `cancel` is set.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Cancelled`](crate::BooksError::Cancelled) if the
    /// flag is set before the last page, or an error from any page request.
    #[tracing::instrument(skip(client, filter, cancel), fields(resource = Self::NAME))]
    async fn list_all_cancellable(
        client: &dyn Transport,
        filter: &Self::Filter,
        cancel: CancelFlag,
    ) -> Result<Vec<Self>> {
        let mut set = Self::filter_set(client, filter)?
            .with_page(1)
            .with_per_page(DEFAULT_PER_PAGE);
        let keys = Self::KEYS;
        let mut walker =
            PageWalker::new(checked_fetch::<Self>(client, Self::PATH, &keys)).with_cancel(cancel);
        walker.get_all_pages(&mut set).await
    }
}
