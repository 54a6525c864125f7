//! Get trait for fetching single entities.

use async_trait::async_trait;
use reqwest::Method;

use super::Resource;
use crate::envelope::decode_single;
use crate::error::Result;
use crate::filter::encode;
use crate::transport::Transport;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use zohobooks::{BooksClient, Contact, Get};
///
/// let client = BooksClient::from_env()?;
/// let contact = Contact::get(&client, "460000000026049").await?;
/// ```
#[async_trait]
pub trait Get: Resource {
    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the service
    /// reports an error code (e.g. unknown ID), or a transport/decode error.
    #[tracing::instrument(skip(client), fields(resource = Self::NAME))]
    async fn get(client: &dyn Transport, id: &str) -> Result<Self> {
        let query = encode(&client.filter_set());
        let raw = client
            .send(Method::GET, &Self::item_path(id), &query, None)
            .await?;
        let keys = Self::KEYS;
        decode_single::<Self>(raw, &keys)?.into_resource()
    }
}
