//! Error types for Seller Hub API calls.
//!
//! Every failure mode of a call maps to exactly one [`Error`] variant, and
//! variants that originate from an HTTP response carry the raw response so
//! callers can inspect status, headers, and body even on failure.

use crate::response::RawResponse;
use http::StatusCode;
use serde::Deserialize;

/// The main error type for Seller Hub API calls.
///
/// # Examples
///
/// ```no_run
/// use sellerhub::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder()
///     .base_url("https://api.example.com")?
///     .build()?;
///
/// match client.get_product("abc").await {
///     Ok(response) => println!("found: {:?}", response.result),
///     Err(Error::Api { status, code, message, .. }) => {
///         eprintln!("API rejected the call ({status}): [{code:?}] {message}");
///     }
///     Err(Error::Http { response }) => {
///         eprintln!("HTTP error {}: {}", response.status, response.body);
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required option or path parameter was missing or empty.
    ///
    /// Raised before any network I/O is attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// The client was misconfigured (no base URL, invalid header).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A connection-level failure (refused, DNS, TLS).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The call deadline expired, mid-send or mid-backoff.
    ///
    /// Terminal: a call that runs out of time is never retried, regardless
    /// of remaining retry budget.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The authenticator failed to decorate the outgoing request.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),

    /// A non-2xx response with no parseable error envelope.
    ///
    /// Carries the raw response, including the body text verbatim.
    #[error("HTTP error {}: {}", .response.status, .response.body)]
    Http {
        /// The raw response as received.
        response: Box<RawResponse>,
    },

    /// A non-2xx response whose body carried the structured error envelope.
    ///
    /// The envelope's diagnostic fields (`code`, `serviceName`, `trid`,
    /// `operationName`) are surfaced for support escalation.
    #[error("API error {status}: {message}")]
    Api {
        /// The HTTP status code.
        status: StatusCode,
        /// Human-readable message from the first envelope entry.
        message: String,
        /// Machine-readable error code, e.g. `NOT_FOUND`.
        code: Option<String>,
        /// The upstream service that produced the error.
        service_name: Option<String>,
        /// Transaction id for support escalation.
        trid: Option<String>,
        /// The server-side operation that failed.
        operation_name: Option<String>,
        /// The raw response as received.
        response: Box<RawResponse>,
    },

    /// A 2xx response whose body could not be decoded into the declared
    /// result type.
    ///
    /// Distinct from a transport failure: the exchange succeeded, the
    /// payload did not. The raw response is preserved for inspection.
    #[error("failed to decode response body: {detail}")]
    ResponseProcessing {
        /// The serde error message.
        detail: String,
        /// The raw response as received.
        response: Box<RawResponse>,
    },
}

impl Error {
    /// Returns `true` if this error is worth retrying.
    ///
    /// Transport failures and responses that indicate a transient server
    /// condition (429 or any 5xx) are retryable. Client errors, decode
    /// failures, and an expired deadline are terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Http { response } => retryable_status(response.status),
            Error::Api { status, .. } => retryable_status(*status),
            _ => false,
        }
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { response } => Some(response.status),
            Error::Api { status, .. } => Some(*status),
            Error::ResponseProcessing { response, .. } => Some(response.status),
            _ => None,
        }
    }

    /// Returns the raw response if this error carries one.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Error::Http { response } => Some(response),
            Error::Api { response, .. } => Some(response),
            Error::ResponseProcessing { response, .. } => Some(response),
            _ => None,
        }
    }
}

fn retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Converts a transport-layer error, distinguishing an expired deadline
/// from a connection failure.
pub(crate) fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::DeadlineExceeded
    } else {
        Error::Transport(e)
    }
}

/// The API's standard JSON shape for reporting errors on a non-2xx
/// response. Absence is valid; classification falls back to
/// [`Error::Http`] when the body does not match.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub errors: Vec<EnvelopeError>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EnvelopeError {
    pub message: Option<String>,
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorExtensions {
    pub code: Option<String>,
    pub service_name: Option<String>,
    /// Opaque diagnostic payload; no fixed schema is assumed.
    #[allow(dead_code)]
    pub exception: Option<serde_json::Map<String, serde_json::Value>>,
    pub trid: Option<String>,
    pub operation_name: Option<String>,
}

/// Classifies a non-2xx response into [`Error::Api`] when the body carries
/// the structured envelope, or [`Error::Http`] otherwise.
pub(crate) fn classify(response: RawResponse) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) if !envelope.errors.is_empty() => {
            let first = &envelope.errors[0];
            let extensions = first.extensions.clone().unwrap_or_default();
            Error::Api {
                status: response.status,
                message: first.message.clone().unwrap_or_default(),
                code: extensions.code,
                service_name: extensions.service_name,
                trid: extensions.trid,
                operation_name: extensions.operation_name,
                response: Box::new(response),
            }
        }
        _ => Error::Http {
            response: Box::new(response),
        },
    }
}

/// A specialized `Result` type for Seller Hub API calls.
pub type Result<T> = std::result::Result<T, Error>;
