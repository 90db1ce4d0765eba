//! The immutable description of one HTTP call before execution.

use crate::{Error, Result};
use http::{HeaderMap, HeaderName, HeaderValue, Method};

/// Describes a single API operation: method, path template, parameter
/// bindings, per-call headers, and content-negotiation flags.
///
/// Every generated operation method builds one of these and hands it to
/// [`Client::call`](crate::Client::call); the descriptor is constructed
/// fresh per call and never mutated after dispatch begins.
///
/// # Examples
///
/// ```
/// use sellerhub::Operation;
/// use http::Method;
///
/// let op = Operation::new("get_product", Method::GET, "/products/{product_id}")
///     .path_param("product_id", "abc")
///     .query("include", "plans");
/// ```
#[derive(Debug, Clone)]
pub struct Operation {
    /// Operation tag, used in log output.
    pub name: &'static str,

    /// The HTTP method.
    pub method: Method,

    /// Path template with `{name}` placeholders.
    pub path_template: &'static str,

    /// Ordered path parameter bindings; all are required and non-empty.
    pub path_params: Vec<(&'static str, String)>,

    /// Query parameters; a parameter the caller left unset is simply
    /// never added here.
    pub query_params: Vec<(&'static str, String)>,

    /// Per-call headers; these override the client's defaults on
    /// (case-insensitive) key collision.
    pub headers: HeaderMap,

    /// Per-operation override for request-body gzip compression.
    /// `None` inherits the client-wide setting.
    pub gzip_request: Option<bool>,

    /// Whether to advertise gzip response encoding to the server. Response
    /// decompression itself is keyed on the response's `Content-Encoding`
    /// header, not this flag.
    pub accept_gzip_response: bool,
}

impl Operation {
    /// Creates a descriptor with the given operation name, method, and
    /// path template.
    pub fn new(name: &'static str, method: Method, path_template: &'static str) -> Self {
        Self {
            name,
            method,
            path_template,
            path_params: Vec::new(),
            query_params: Vec::new(),
            headers: HeaderMap::new(),
            gzip_request: None,
            accept_gzip_response: true,
        }
    }

    /// Binds a required path parameter.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter.
    pub fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query_params.push((name, value.into()));
        self
    }

    /// Adds a per-call header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the header name or value is
    /// invalid.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Overrides the client-wide request gzip setting for this call.
    pub fn gzip_request(mut self, enabled: bool) -> Self {
        self.gzip_request = Some(enabled);
        self
    }

    /// Disables advertising gzip response encoding for this call.
    pub fn accept_gzip_response(mut self, accept: bool) -> Self {
        self.accept_gzip_response = accept;
        self
    }
}

/// Rejects a missing or blank required option field before any descriptor
/// is built or network I/O attempted.
pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("`{name}` must not be empty")));
    }
    Ok(())
}
