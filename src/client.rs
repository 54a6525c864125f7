//! Zoho Books API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on entity types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use url::Url;

use crate::error::{BooksError, Result};
use crate::filter::QueryPairs;
use crate::transport::Transport;

const DEFAULT_API_URL: &str = "https://books.zoho.com/api/v3/";
const USER_AGENT: &str = concat!("zohobooks/", env!("CARGO_PKG_VERSION"));

/// How the token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Zoho-oauthtoken <token>`
    #[default]
    OAuth,
    /// `Zoho-authtoken <token>` (legacy auth tokens)
    AuthToken,
}

impl AuthScheme {
    fn header_prefix(self) -> &'static str {
        match self {
            AuthScheme::OAuth => "Zoho-oauthtoken",
            AuthScheme::AuthToken => "Zoho-authtoken",
        }
    }

    fn from_env_value(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "oauth" | "oauthtoken" => Ok(AuthScheme::OAuth),
            "authtoken" => Ok(AuthScheme::AuthToken),
            other => Err(BooksError::ConfigMissing(format!(
                "ZOHO_BOOKS_AUTH_SCHEME must be 'oauth' or 'authtoken', got '{other}'"
            ))),
        }
    }
}

/// Low-level Zoho Books API client.
///
/// Handles authentication and HTTP requests, and implements [`Transport`]
/// so the filter encoder, envelope decoder and page walker can run on top
/// of it. Entity-specific operations are implemented via the `Get`, `List`,
/// `Create`, `Update` and `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use zohobooks::BooksClient;
///
/// # async fn example() -> zohobooks::Result<()> {
/// // Create from environment variables
/// let client = BooksClient::from_env()?;
///
/// // Or configure manually
/// let client = BooksClient::new("your-token", "10234695", "https://books.zoho.com/api/v3")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BooksClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
    organization_id: String,
    auth_scheme: AuthScheme,
}

impl std::fmt::Debug for BooksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BooksClient")
            .field("base_url", &self.base_url.as_str())
            .field("organization_id", &self.organization_id)
            .finish_non_exhaustive()
    }
}

impl BooksClient {
    /// Create a client from environment variables.
    ///
    /// Uses `ZOHO_BOOKS_AUTH_TOKEN` and `ZOHO_BOOKS_ORGANIZATION_ID`, and
    /// optionally `ZOHO_BOOKS_API_URL` (defaults to
    /// `https://books.zoho.com/api/v3/`) and `ZOHO_BOOKS_AUTH_SCHEME`
    /// (`oauth` or `authtoken`).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("ZOHO_BOOKS_AUTH_TOKEN").map_err(|_| {
            BooksError::ConfigMissing("ZOHO_BOOKS_AUTH_TOKEN environment variable not set".to_string())
        })?;

        let organization_id = env::var("ZOHO_BOOKS_ORGANIZATION_ID").map_err(|_| {
            BooksError::ConfigMissing(
                "ZOHO_BOOKS_ORGANIZATION_ID environment variable not set".to_string(),
            )
        })?;

        let base_url =
            env::var("ZOHO_BOOKS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let client = Self::new(&token, &organization_id, &base_url)?;
        match env::var("ZOHO_BOOKS_AUTH_SCHEME") {
            Ok(scheme) => Ok(client.with_auth_scheme(AuthScheme::from_env_value(&scheme)?)),
            Err(_) => Ok(client),
        }
    }

    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `token` - Zoho API token
    /// * `organization_id` - Organization every request is issued for
    /// * `base_url` - Base URL for the API (e.g., `https://books.zoho.com/api/v3`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the organization is empty.
    pub fn new(token: &str, organization_id: &str, base_url: &str) -> Result<Self> {
        if organization_id.trim().is_empty() {
            return Err(BooksError::ConfigMissing(
                "organization id must not be empty".to_string(),
            ));
        }

        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(BooksError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
            organization_id: organization_id.to_string(),
            auth_scheme: AuthScheme::default(),
        })
    }

    /// Use a different `Authorization` scheme.
    #[must_use]
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn authorization(&self) -> String {
        format!("{} {}", self.auth_scheme.header_prefix(), self.token)
    }

    /// Build the full request URL. Query values are percent-encoded here.
    fn request_url(&self, path: &str, query: &QueryPairs) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Check response status and convert errors.
    ///
    /// Error statuses whose body is a `{code, message}` envelope are passed
    /// through so the caller sees the application code.
    async fn check_response(response: Response) -> Result<Value> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(BooksError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => {
                return Err(BooksError::ApiError {
                    message: format!("HTTP {status}"),
                    status_code: Some(status.as_u16()),
                })
            }
        };

        if let Ok(json) = serde_json::from_str::<Value>(&body) {
            if json.get("code").and_then(Value::as_i64).is_some() {
                tracing::debug!(%status, "error status carries an application envelope");
                return Ok(json);
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return Err(BooksError::ApiError {
                    message: msg.to_string(),
                    status_code: Some(status.as_u16()),
                });
            }
        }

        Err(BooksError::ApiError {
            message: if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body
            },
            status_code: Some(status.as_u16()),
        })
    }
}

#[async_trait]
impl Transport for BooksClient {
    fn organization_id(&self) -> &str {
        &self.organization_id
    }

    #[tracing::instrument(skip(self, query, body), fields(params = query.len()))]
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryPairs,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.request_url(path, query)?;

        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, self.authorization());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(BooksError::HttpError)?;

        Self::check_response(response).await
    }
}
