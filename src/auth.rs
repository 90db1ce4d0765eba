//! The authenticator boundary.
//!
//! Token acquisition and refresh live outside this crate; the core only
//! consumes a capability that decorates an outgoing request with
//! credentials. The authenticator runs once per attempt, after every other
//! header has been set, so auth material is never clobbered by defaults.

use crate::Result;
use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use std::fmt;

/// Injects credentials into an outgoing request.
///
/// Implementations must be cheap to call: the client invokes
/// [`authenticate`](Authenticator::authenticate) on every attempt,
/// including retries, so an implementation holding a token cache can
/// refresh between attempts.
///
/// Clones of a [`Client`](crate::Client) share their authenticator by
/// reference; per-clone state lives elsewhere.
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Decorates the request headers with credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`](crate::Error::Authentication) if
    /// credentials cannot be produced; the call fails without a network
    /// attempt.
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<()>;
}

/// Sends a fixed bearer token in the `Authorization` header.
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    /// Creates an authenticator around an already-acquired token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let value = HeaderValue::try_from(format!("Bearer {}", self.token)).map_err(|e| {
            crate::Error::Authentication(format!("token is not a valid header value: {e}"))
        })?;
        headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token itself.
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[redacted]")
            .finish()
    }
}

/// Leaves requests undecorated. Useful against local mock servers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authenticate(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_sets_authorization_header() {
        let auth = BearerTokenAuthenticator::new("secret");
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer secret");
    }

    #[test]
    fn bearer_overwrites_a_default_authorization_header() {
        let auth = BearerTokenAuthenticator::new("fresh");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));
        auth.authenticate(&mut headers).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer fresh");
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let auth = BearerTokenAuthenticator::new("secret");
        assert!(!format!("{auth:?}").contains("secret"));
    }

    #[test]
    fn no_auth_leaves_headers_untouched() {
        let mut headers = HeaderMap::new();
        NoAuthAuthenticator.authenticate(&mut headers).unwrap();
        assert!(headers.is_empty());
    }
}
