//! Envelope value types shared by every endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{BooksError, Result};

/// The `{code, message, resource}` wrapper common to every response.
///
/// `code == 0` signals success. Any other code is a server-reported failure;
/// `resource` is then normally absent. A non-zero code is a decoded result,
/// not an error: callers choose whether to turn it into one with
/// [`Envelope::into_resource`] or [`Envelope::check`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub resource: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Map the resource to a different type.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Envelope<U> {
        Envelope {
            code: self.code,
            message: self.message,
            resource: self.resource.map(f),
        }
    }

    /// Turn a non-zero code into [`BooksError::Remote`].
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`] when `code != 0`.
    pub fn check(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(BooksError::Remote {
                code: self.code,
                message: self.message,
            })
        }
    }

    /// Take the resource out of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`] when `code != 0`, or
    /// [`BooksError::MalformedEnvelope`] when a successful envelope has no resource.
    pub fn into_resource(self) -> Result<T> {
        let envelope = self.check()?;
        envelope.resource.ok_or_else(|| {
            BooksError::MalformedEnvelope(format!(
                "successful response without a resource: {}",
                envelope.message
            ))
        })
    }
}

/// A decoded resource in the cardinality its candidate key declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Single(T),
    Sequence(Vec<T>),
}

impl<T> Payload<T> {
    pub fn is_single(&self) -> bool {
        matches!(self, Payload::Single(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Payload::Single(_) => 1,
            Payload::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The page cursor reported by list endpoints under `page_context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub page: u32,
    pub per_page: u32,
    pub has_more_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl PageContext {
    /// Cursor with only the three fields the walker reads.
    pub fn new(page: u32, per_page: u32, has_more_page: bool) -> Self {
        Self {
            page,
            per_page,
            has_more_page,
            report_name: None,
            applied_filter: None,
            sort_column: None,
            sort_order: None,
        }
    }
}

/// A list response: an envelope over a sequence plus its page cursor.
///
/// The cursor is absent on error responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedEnvelope<T> {
    #[serde(flatten)]
    pub envelope: Envelope<Vec<T>>,
    pub page_context: Option<PageContext>,
}

impl<T> PagedEnvelope<T> {
    pub fn new(envelope: Envelope<Vec<T>>, page_context: Option<PageContext>) -> Self {
        Self {
            envelope,
            page_context,
        }
    }

    /// Whether the server reported another page. No cursor means no more pages.
    pub fn has_more_page(&self) -> bool {
        self.page_context.as_ref().is_some_and(|c| c.has_more_page)
    }

    /// Turn a non-zero code into [`BooksError::Remote`].
    ///
    /// # Errors
    ///
    /// Returns [`BooksError::Remote`] when the envelope's code is not 0.
    pub fn check(self) -> Result<Self> {
        let page_context = self.page_context;
        Ok(Self {
            envelope: self.envelope.check()?,
            page_context,
        })
    }

    /// The items on this page, empty when the resource is absent.
    pub fn into_items(self) -> Vec<T> {
        self.envelope.resource.unwrap_or_default()
    }
}
