//! Create trait for adding entities.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::Resource;
use crate::envelope::decode_single;
use crate::error::Result;
use crate::filter::encode;
use crate::transport::Transport;

/// Create a new entity.
#[async_trait]
pub trait Create: Resource {
    /// Request body for creation.
    type Params: Serialize + Send + Sync;

    /// Create the entity and return it as stored by the service.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the service
    /// rejects the record, or a transport/decode error.
    #[tracing::instrument(skip(client, params), fields(resource = Self::NAME))]
    async fn create(client: &dyn Transport, params: &Self::Params) -> Result<Self> {
        let body = serde_json::to_value(params)?;
        let query = encode(&client.filter_set());
        let raw = client
            .send(Method::POST, Self::PATH, &query, Some(&body))
            .await?;
        let keys = Self::KEYS;
        decode_single::<Self>(raw, &keys)?.into_resource()
    }
}
