//! The Seller Hub client and its shared invocation pipeline.
//!
//! Every generated operation method delegates to [`Client::call`]: one
//! code path assembles the request, applies auth, retries with backoff
//! under a single call-wide deadline, and classifies the outcome into a
//! typed result or a typed error.

use crate::{
    auth::{Authenticator, NoAuthAuthenticator},
    error::{classify, from_reqwest},
    operation::Operation,
    path::render_path,
    retry::{self, RetryConfig},
    Error, RawResponse, Response, Result,
};
use flate2::{write::GzEncoder, Compression};
use http::{
    header::{ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_TYPE},
    HeaderMap, HeaderName, HeaderValue,
};
use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// A client for the Seller Hub product listing and publishing API.
///
/// The client is cheap to clone: configuration is copied by value, while
/// the [`Authenticator`] is shared by reference so a token cache stays
/// consistent across clones. Concurrent in-flight calls each read the
/// configuration once at entry and are unaffected by later setter calls.
///
/// # Examples
///
/// ```no_run
/// use sellerhub::{BearerTokenAuthenticator, Client, CreateProductOptions};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), sellerhub::Error> {
/// let mut client = Client::builder()
///     .base_url("https://api.example.com")?
///     .authenticator(Arc::new(BearerTokenAuthenticator::new("token")))
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// client.enable_retries(4, Duration::from_secs(30));
///
/// let options = CreateProductOptions::new("My product", "SOFTWARE", "SOFTWARE");
/// let created = client.create_product(&options).await?;
/// println!("created: {:?}", created.result);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
    authenticator: Arc<dyn Authenticator>,
    timeout: Option<Duration>,
    retry: RetryConfig,
    gzip_requests: bool,
}

impl Client {
    /// Creates a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Turns on automatic retries of transient failures. Zero values
    /// select the defaults (4 retries, 30 second budget).
    ///
    /// The new configuration replaces the old wholesale; calls already in
    /// flight keep the value they started with.
    pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
        self.retry = RetryConfig::enabled(max_retries, max_retry_interval);
    }

    /// Turns automatic retries back off.
    pub fn disable_retries(&mut self) {
        self.retry = RetryConfig::default();
    }

    /// The retry configuration new calls will snapshot.
    pub fn retry_config(&self) -> RetryConfig {
        self.retry
    }

    /// Executes one described operation through the shared pipeline.
    ///
    /// This is the engine behind every generated operation method:
    /// assemble the request, authenticate, dispatch with retries under the
    /// call-wide deadline, then decode the result or classify the error.
    /// Exactly one of a response or an error is produced per call; a 2xx
    /// reply with an empty body is a success whose `result` is `None`.
    pub async fn call<Req, Res>(
        &self,
        operation: Operation,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        // Snapshot the config; later setter calls must not affect us.
        let retry = self.retry;

        // Everything before the loop is validation and pure assembly: a
        // failure here reaches the caller before any network I/O.
        let url = self.assemble_url(&operation)?;
        let body_bytes = self.assemble_body(&operation, body)?;
        let gzipped = body_bytes.is_some() && operation.gzip_request.unwrap_or(self.gzip_requests);
        let base_headers = self.assemble_headers(&operation, body_bytes.is_some(), gzipped);

        let started = Instant::now();
        let deadline = self.timeout.map(|t| tokio::time::Instant::now() + t);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let outcome = self
                .attempt::<Res>(
                    &operation,
                    &url,
                    &base_headers,
                    body_bytes.as_deref(),
                    deadline,
                    attempt,
                    started,
                )
                .await;

            let err = match outcome {
                Ok(response) => return Ok(response),
                Err(err) => err,
            };

            // An expired deadline short-circuits everything, and a
            // terminal error or exhausted budget hands back the last
            // failure as-is.
            if matches!(err, Error::DeadlineExceeded)
                || !err.is_retryable()
                || !retry.allows(attempt, started.elapsed())
            {
                return Err(err);
            }

            let delay = err
                .raw_response()
                .and_then(|r| retry::retry_after(&r.headers))
                .map(|d| d.min(retry.max_retry_interval))
                .unwrap_or_else(|| retry.delay_for_attempt(attempt));

            tracing::warn!(
                operation = operation.name,
                error = %err,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "attempt failed; retrying after backoff"
            );

            self.backoff(delay, deadline).await?;
        }
    }

    /// One full attempt: authenticate, dispatch, decode.
    #[allow(clippy::too_many_arguments)]
    async fn attempt<Res>(
        &self,
        operation: &Operation,
        url: &Url,
        base_headers: &HeaderMap,
        body: Option<&[u8]>,
        deadline: Option<tokio::time::Instant>,
        attempt: u32,
        started: Instant,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        // The authenticator runs once per attempt and always last, so
        // credentials are never clobbered by defaults and a token cache
        // can refresh between retries.
        let mut headers = base_headers.clone();
        self.authenticator.authenticate(&mut headers)?;

        tracing::debug!(
            operation = operation.name,
            method = %operation.method,
            url = %url,
            attempt,
            "dispatching request"
        );

        let mut request = self
            .http
            .request(operation.method.clone(), url.clone())
            .headers(headers);
        if let Some(bytes) = body {
            request = request.body(bytes.to_vec());
        }

        let raw = self.dispatch(request, deadline).await?;
        self.decode(operation, raw, started.elapsed(), attempt)
    }

    /// Sends exactly one request. The in-flight exchange is abandoned the
    /// moment the deadline fires; retry orchestration lives in `call`.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        deadline: Option<tokio::time::Instant>,
    ) -> Result<RawResponse> {
        let exchange = async {
            let response = request.send().await.map_err(from_reqwest)?;
            let status = response.status();
            let headers = response.headers().clone();
            let bytes = response.bytes().await.map_err(from_reqwest)?;
            Ok(RawResponse {
                status,
                body: decode_body(&headers, &bytes),
                headers,
            })
        };

        match deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, exchange).await {
                Ok(result) => result,
                Err(_) => Err(Error::DeadlineExceeded),
            },
            None => exchange.await,
        }
    }

    /// Classifies a raw response into a typed result or a typed error.
    fn decode<Res>(
        &self,
        operation: &Operation,
        raw: RawResponse,
        latency: Duration,
        attempts: u32,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let RawResponse {
            status,
            headers,
            body,
        } = raw;

        tracing::info!(
            operation = operation.name,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            attempts,
            "received response"
        );

        if !status.is_success() {
            if status.is_server_error() {
                tracing::warn!(
                    operation = operation.name,
                    status = status.as_u16(),
                    body = %body,
                    "server error"
                );
            } else {
                tracing::error!(
                    operation = operation.name,
                    status = status.as_u16(),
                    body = %body,
                    "client error"
                );
            }
            return Err(classify(RawResponse {
                status,
                headers,
                body,
            }));
        }

        // An empty 2xx body is a "no content" success, not a decode error.
        if body.trim().is_empty() {
            return Ok(Response::new(None, body, status, headers, latency, attempts));
        }

        match serde_json::from_str::<Res>(&body) {
            Ok(result) => Ok(Response::new(
                Some(result),
                body,
                status,
                headers,
                latency,
                attempts,
            )),
            Err(e) => {
                tracing::error!(
                    operation = operation.name,
                    error = %e,
                    body = %body,
                    "failed to decode response body"
                );
                Err(Error::ResponseProcessing {
                    detail: e.to_string(),
                    response: Box::new(RawResponse {
                        status,
                        headers,
                        body,
                    }),
                })
            }
        }
    }

    /// Waits out a retry backoff, bailing with [`Error::DeadlineExceeded`]
    /// if the deadline fires mid-sleep; remaining attempts are skipped.
    async fn backoff(&self, delay: Duration, deadline: Option<tokio::time::Instant>) -> Result<()> {
        let wake = tokio::time::Instant::now() + delay;
        if let Some(deadline) = deadline {
            if wake >= deadline {
                tokio::time::sleep_until(deadline).await;
                return Err(Error::DeadlineExceeded);
            }
        }
        tokio::time::sleep(delay).await;
        Ok(())
    }

    fn assemble_url(&self, operation: &Operation) -> Result<Url> {
        if self.base_url.as_str().is_empty() || !self.base_url.has_host() {
            return Err(Error::Configuration(
                "base URL must be set before making calls".to_string(),
            ));
        }
        let path = render_path(operation.path_template, &operation.path_params)?;
        let mut url = self.base_url.clone();
        url.set_path(&path);
        if !operation.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &operation.query_params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Serializes (and optionally gzips) the request body once; attempts
    /// reuse the same bytes.
    fn assemble_body<Req>(&self, operation: &Operation, body: Option<&Req>) -> Result<Option<Vec<u8>>>
    where
        Req: Serialize,
    {
        let Some(body) = body else {
            return Ok(None);
        };
        let bytes =
            serde_json::to_vec(body).map_err(|e| Error::Serialization(e.to_string()))?;
        if operation.gzip_request.unwrap_or(self.gzip_requests) {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(&bytes)
                .map_err(|e| Error::Serialization(format!("gzip compression failed: {e}")))?;
            let compressed = encoder
                .finish()
                .map_err(|e| Error::Serialization(format!("gzip compression failed: {e}")))?;
            Ok(Some(compressed))
        } else {
            Ok(Some(bytes))
        }
    }

    /// Merges default and per-call headers (per-call wins) and applies
    /// content negotiation. `Content-Encoding` is set only when a body was
    /// actually compressed; its absence otherwise is part of the contract.
    fn assemble_headers(&self, operation: &Operation, has_body: bool, gzipped: bool) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        for (name, value) in &operation.headers {
            headers.insert(name.clone(), value.clone());
        }
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            if gzipped {
                headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
            }
        }
        if !operation.accept_gzip_response {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
        }
        headers
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use sellerhub::{ClientBuilder, RetryConfig};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), sellerhub::Error> {
/// let client = ClientBuilder::new()
///     .base_url("https://api.example.com")?
///     .default_header("User-Agent", "my-app/1.0")?
///     .timeout(Duration::from_secs(30))
///     .retry(RetryConfig::enabled(3, Duration::from_secs(20)))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<Url>,
    default_headers: HeaderMap,
    authenticator: Option<Arc<dyn Authenticator>>,
    timeout: Option<Duration>,
    retry: RetryConfig,
    gzip_requests: bool,
}

impl ClientBuilder {
    /// Creates a builder with retries disabled and no default headers.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HeaderMap::new(),
            authenticator: None,
            timeout: None,
            retry: RetryConfig::default(),
            gzip_requests: false,
        }
    }

    /// Sets the base URL for all requests.
    ///
    /// # Errors
    ///
    /// A malformed URL is rejected here, at construction time, with
    /// [`Error::Validation`], before any call is attempted.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(url.as_ref())
            .map_err(|e| Error::Validation(format!("invalid base URL: {e}")))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Adds a header sent with every request. Per-call headers override
    /// these on key collision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authenticator that decorates every attempt. Defaults to
    /// [`NoAuthAuthenticator`].
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Sets the total per-call deadline, covering every attempt and every
    /// backoff sleep. It is not reset between attempts.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the initial retry configuration.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Gzip-compresses JSON request bodies and sets
    /// `Content-Encoding: gzip`. Off by default.
    pub fn gzip_request_bodies(mut self, enabled: bool) -> Self {
        self.gzip_requests = enabled;
        self
    }

    /// Builds the configured [`Client`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no base URL was provided or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Configuration("base URL is required".to_string()))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Client {
            http,
            base_url,
            default_headers: self.default_headers,
            authenticator: self
                .authenticator
                .unwrap_or_else(|| Arc::new(NoAuthAuthenticator)),
            timeout: self.timeout,
            retry: self.retry,
            gzip_requests: self.gzip_requests,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes response bytes into text, keyed on the *response's*
/// `Content-Encoding` header: the transport already inflates gzip bodies
/// and strips the header, so one still marked `gzip` reached us undecoded
/// (e.g. the caller pinned `Accept-Encoding` but the server compressed
/// anyway) and is inflated here. Undecodable bytes pass through verbatim
/// and surface as a decode or classification error downstream.
fn decode_body(headers: &HeaderMap, bytes: &[u8]) -> String {
    let is_gzip = headers
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("gzip"))
        .unwrap_or(false);
    if is_gzip {
        use std::io::Read;

        let mut decoder = flate2::read::GzDecoder::new(bytes);
        let mut body = String::new();
        if decoder.read_to_string(&mut body).is_ok() {
            return body;
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}
