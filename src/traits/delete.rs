//! Delete trait for removing entities.

use async_trait::async_trait;
use reqwest::Method;

use super::{send_message_only, Resource};
use crate::error::Result;
use crate::transport::Transport;

/// Delete an entity by ID.
#[async_trait]
pub trait Delete: Resource {
    /// Delete the entity and return the service's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`](crate::BooksError::Remote) if the service
    /// refuses the deletion, or a transport/decode error.
    #[tracing::instrument(skip(client), fields(resource = Self::NAME))]
    async fn delete(client: &dyn Transport, id: &str) -> Result<String> {
        send_message_only(client, Method::DELETE, &Self::item_path(id)).await
    }
}
