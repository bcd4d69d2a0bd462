//! Error handling for the github-user crate.
use std::{error::Error as StdError, fmt};

use reqwest::StatusCode;

/// Error type for the github-user crate.
#[derive(Debug)]
pub struct GithubUserError {
    /// Inner error.
    inner: Box<Inner>,
}

impl GithubUserError {
    /// Create a new error.
    pub(crate) fn new(kind: GithubUserErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                status: None,
                body: None,
                source: None,
            }),
        }
    }

    /// Create a new error with a source.
    pub(crate) fn new_with_source<E>(kind: GithubUserErrorKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        let mut err = Self::new(kind);
        err.inner.source = Some(source.into());
        err
    }

    /// Create a new error with a text as source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Attach the HTTP status and the body returned by the server.
    pub(crate) fn with_response(mut self, status: StatusCode, body: String) -> Self {
        self.inner.status = Some(status);
        self.inner.body = Some(body);
        self
    }

    /// Kind of the error
    pub fn kind(&self) -> &GithubUserErrorKind {
        &self.inner.kind
    }

    /// HTTP status, for [`GithubUserErrorKind::Http`] errors
    pub fn status(&self) -> Option<StatusCode> {
        self.inner.status
    }

    /// Body returned by the server, for [`GithubUserErrorKind::Http`] errors
    pub fn body(&self) -> Option<&str> {
        self.inner.body.as_deref()
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the github-user crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: GithubUserErrorKind,

    /// Status of a failed HTTP response.
    status: Option<StatusCode>,

    /// Body of a failed HTTP response.
    body: Option<String>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of [`GithubUserError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GithubUserErrorKind {
    /// Missing or invalid configuration (credentials, base url, headers).
    Config,

    /// Transport error reported by reqwest.
    Reqwest,

    /// The server answered with a non-2xx status.
    Http,

    /// Error related to serde.
    Serde,

    /// Error while parsing the configuration file.
    Toml,

    /// Error related to the filesystem.
    Io,
}

impl fmt::Display for GithubUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(status) = self.inner.status {
            write!(f, " ({status})")?;
        }
        if let Some(body) = self.inner.body.as_deref().filter(|b| !b.is_empty()) {
            write!(f, ": {body}")?;
        } else if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for GithubUserError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for GithubUserError {
    fn from(e: reqwest::Error) -> Self {
        Self::new_with_source(GithubUserErrorKind::Reqwest, e)
    }
}

impl From<serde_json::Error> for GithubUserError {
    fn from(e: serde_json::Error) -> Self {
        Self::new_with_source(GithubUserErrorKind::Serde, e)
    }
}

impl From<toml::de::Error> for GithubUserError {
    fn from(e: toml::de::Error) -> Self {
        Self::new_with_source(GithubUserErrorKind::Toml, e)
    }
}

impl From<std::io::Error> for GithubUserError {
    fn from(e: std::io::Error) -> Self {
        Self::new_with_source(GithubUserErrorKind::Io, e)
    }
}

impl From<&str> for GithubUserError {
    fn from(text: &str) -> Self {
        Self::new(GithubUserErrorKind::Config).with_text(text)
    }
}

impl From<String> for GithubUserError {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_error() {
        let err = GithubUserError::new(GithubUserErrorKind::Http)
            .with_response(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#.into());
        assert_eq!(err.kind(), &GithubUserErrorKind::Http);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            err.to_string(),
            r#"Http (404 Not Found): {"message":"Not Found"}"#
        );
    }

    #[test]
    fn config_error_from_text() {
        let err: GithubUserError = "missing token".into();
        assert_eq!(err.kind(), &GithubUserErrorKind::Config);
        assert_eq!(err.to_string(), "Config: missing token");
        assert!(err.source().is_some());
        assert!(err.status().is_none());
    }
}
