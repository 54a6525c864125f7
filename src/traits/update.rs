//! Update trait for modifying entities.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::Resource;
use crate::envelope::decode_single;
use crate::error::Result;
use crate::filter::encode;
use crate::transport::Transport;

/// Update an existing entity.
///
/// # Example
///
/// ```ignore
/// use zohobooks::{BooksClient, Contact, ContactParams, Update};
///
/// let client = BooksClient::from_env()?;
/// let updated = Contact::update(
///     &client,
///     "460000000026049",
///     &ContactParams {
///         company_name: Some("Bowman and Co".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Resource {
    /// Parameters for the update.
    type Params: Serialize + Send + Sync;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the entity
    /// is not found or the update is rejected, or a transport/decode error.
    #[tracing::instrument(skip(client, params), fields(resource = Self::NAME))]
    async fn update(client: &dyn Transport, id: &str, params: &Self::Params) -> Result<Self> {
        let body = serde_json::to_value(params)?;
        let query = encode(&client.filter_set());
        let raw = client
            .send(Method::PUT, &Self::item_path(id), &query, Some(&body))
            .await?;
        let keys = Self::KEYS;
        decode_single::<Self>(raw, &keys)?.into_resource()
    }
}
