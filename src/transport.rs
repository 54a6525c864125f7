//! The boundary between request building and the HTTP stack.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::filter::{FilterSet, QueryPairs};

/// Sends one request and returns the raw structured response.
///
/// Implementations own authentication and timeouts. Callers only build the
/// query pairs (via [`encode`](crate::encode)) and interpret the returned
/// JSON (via the envelope decoder).
#[async_trait]
pub trait Transport: Send + Sync {
    /// The organization every request is issued for.
    fn organization_id(&self) -> &str;

    /// Send a request.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - Path relative to the API base URL (e.g. `contacts/123`)
    /// * `query` - Query pairs, not yet percent-encoded
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request cannot be completed.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryPairs,
        body: Option<&Value>,
    ) -> Result<Value>;

    /// A fresh filter set for this transport's organization.
    fn filter_set(&self) -> FilterSet {
        FilterSet::new(self.organization_id())
    }
}
