//! Response wrappers preserving both decoded data and raw HTTP details.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A raw HTTP response: status, headers, and the body text after any
/// transport-level gzip decoding.
///
/// Owned by the dispatcher until decoding, and carried inside error
/// variants so callers can inspect the exchange even on failure.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body as text.
    pub body: String,
}

/// A successful API response.
///
/// Wraps the decoded result together with metadata about the HTTP
/// transaction. `result` is `None` when the server replied 2xx with an
/// empty body; that is a valid "no content" success, not an error.
///
/// # Examples
///
/// ```no_run
/// use sellerhub::Client;
///
/// # async fn example() -> Result<(), sellerhub::Error> {
/// let client = Client::builder()
///     .base_url("https://api.example.com")?
///     .build()?;
///
/// let response = client.get_product("abc").await?;
/// if let Some(product) = &response.result {
///     println!("{:?} ({} attempts, {:?})", product.product_name, response.attempts, response.latency);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded result, or `None` for an empty-body success.
    pub result: Option<T>,

    /// The raw response body, useful for debugging and logging.
    pub raw_body: String,

    /// The HTTP status code.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Total latency of the call, across all attempts.
    pub latency: Duration,

    /// Number of attempts made; `1` means no retries were needed.
    pub attempts: u32,
}

impl<T> Response<T> {
    pub(crate) fn new(
        result: Option<T>,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
        attempts: u32,
    ) -> Self {
        Self {
            result,
            raw_body,
            status,
            headers,
            latency,
            attempts,
        }
    }

    /// Consumes the response, returning the decoded result if any.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Maps the decoded result to a different type, preserving metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            result: self.result.map(f),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        }
    }

    /// Returns `true` if the call needed more than one attempt.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a response header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}
