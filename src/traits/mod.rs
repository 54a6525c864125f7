//! Trait definitions for Zoho Books operations.
//!
//! Each entity type implements [`Resource`] to declare where it lives and
//! which envelope keys carry it, then opts into the operations its endpoint
//! supports. The operations are call-throughs to the filter encoder, the
//! envelope decoder and the page walker.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub use update::Update;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::envelope::{decode_single, Candidates};
use crate::error::Result;
use crate::filter::encode;
use crate::transport::Transport;

/// An entity exposed by the API.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    /// Singular name for logs and messages (e.g. `"contact"`).
    const NAME: &'static str;

    /// Collection path relative to the API base (e.g. `"contacts"`).
    const PATH: &'static str;

    /// Envelope keys the entity arrives under, singular and plural.
    const KEYS: Candidates;

    /// Path of one entity.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::PATH, urlencoding::encode(id))
    }
}

/// Send a request whose response carries only `code` and `message`.
///
/// Returns the message of a successful response.
pub(crate) async fn send_message_only(
    client: &dyn Transport,
    method: Method,
    path: &str,
) -> Result<String> {
    let query = encode(&client.filter_set());
    let raw = client.send(method, path, &query, None).await?;
    let envelope = decode_single::<serde_json::Value>(raw, &Candidates::NONE)?.check()?;
    Ok(envelope.message)
}
