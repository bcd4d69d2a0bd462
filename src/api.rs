//! Generic HTTP client bound to a base url and a fixed set of headers
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    config::Credentials,
    errors::{GithubUserError, GithubUserErrorKind},
};

/// Default base url
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client sending unauthenticated and Basic-authenticated requests
///
/// Every instance owns its base url: building a second client never changes
/// where the first one sends its requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base url, relative request urls are appended to it
    base_url: Url,

    /// Headers sent with every request
    additional_headers: HeaderMap,

    /// Credentials for the `authorized_*` requests
    credentials: Option<Credentials>,

    /// Reqwest client
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new client
    /// # Errors
    /// Error if the base url or one of the headers is invalid
    pub fn new<I, K, V>(
        base_url: &str,
        additional_headers: I,
        credentials: Option<Credentials>,
    ) -> Result<Self, GithubUserError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let base_url = Url::parse(base_url)
            .map_err(|e| GithubUserError::new_with_source(GithubUserErrorKind::Config, e))?;
        let mut headers = HeaderMap::new();
        for (name, value) in additional_headers {
            let name = HeaderName::from_bytes(name.as_ref().as_bytes())
                .map_err(|e| GithubUserError::new_with_source(GithubUserErrorKind::Config, e))?;
            let value = HeaderValue::from_str(value.as_ref())
                .map_err(|e| GithubUserError::new_with_source(GithubUserErrorKind::Config, e))?;
            headers.insert(name, value);
        }
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url,
            additional_headers: headers,
            credentials,
            client,
        })
    }

    /// Create a new client bound to [`GITHUB_API_URL`]
    /// # Errors
    /// Error if one of the headers is invalid
    pub fn github<I, K, V>(
        additional_headers: I,
        credentials: Option<Credentials>,
    ) -> Result<Self, GithubUserError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::new(GITHUB_API_URL, additional_headers, credentials)
    }

    /// Base url of this client
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers sent with the unauthenticated requests
    pub fn headers(&self) -> &HeaderMap {
        &self.additional_headers
    }

    /// Headers sent with the authenticated requests
    ///
    /// The `Authorization` header replaces any value set in the additional headers.
    /// # Errors
    /// Error if the client has no credentials
    pub fn authorized_headers(&self) -> Result<HeaderMap, GithubUserError> {
        let mut headers = self.additional_headers.clone();
        headers.insert(AUTHORIZATION, self.auth_header()?);
        Ok(headers)
    }

    /// `Basic base64(username:token)`
    fn auth_header(&self) -> Result<HeaderValue, GithubUserError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            GithubUserError::from("Authenticated request on a client without credentials")
        })?;
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            credentials.username(),
            credentials.token()
        ));
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|e| GithubUserError::new_with_source(GithubUserErrorKind::Config, e))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Resolve `url` against the base url, absolute urls are kept as is
    pub(crate) fn build_url(&self, url: &str) -> Result<Url, GithubUserError> {
        let full = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.as_str().trim_end_matches('/'),
                url.trim_start_matches('/')
            )
        };
        Url::parse(&full)
            .map_err(|e| GithubUserError::new_with_source(GithubUserErrorKind::Config, e))
    }

    /// Send the request and decode the body
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GithubUserError> {
        let request = request.build()?;
        log::debug!("{} {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log::warn!("Request failed with status {status}");
            return Err(GithubUserError::new(GithubUserErrorKind::Http).with_response(status, text));
        }
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        Ok(serde_json::from_str(body)?)
    }

    // unauthenticated requests

    /// Make an unauthenticated GET request, `params` are sent as query string
    /// # Errors
    /// Error on transport failure, non-2xx status or undecodable body
    pub async fn get_request<T, P>(&self, url: &str, params: &P) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = self
            .client
            .get(self.build_url(url)?)
            .headers(self.additional_headers.clone())
            .query(params);
        self.execute(request).await
    }

    /// Make an unauthenticated POST request, `body` is sent as json
    /// # Errors
    /// Error on transport failure, non-2xx status or undecodable body
    pub async fn post_request<T, B>(&self, url: &str, body: &B) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .post(self.build_url(url)?)
            .headers(self.additional_headers.clone())
            .json(body);
        self.execute(request).await
    }

    /// Make an unauthenticated PATCH request, `body` is sent as json
    /// # Errors
    /// Error on transport failure, non-2xx status or undecodable body
    pub async fn patch_request<T, B>(&self, url: &str, body: &B) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .patch(self.build_url(url)?)
            .headers(self.additional_headers.clone())
            .json(body);
        self.execute(request).await
    }

    /// Make an unauthenticated DELETE request, `params` are sent as query string
    /// # Errors
    /// Error on transport failure, non-2xx status or undecodable body
    pub async fn delete_request<T, P>(&self, url: &str, params: &P) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = self
            .client
            .delete(self.build_url(url)?)
            .headers(self.additional_headers.clone())
            .query(params);
        self.execute(request).await
    }

    // authorized requests

    /// Make an authenticated GET request, `params` are sent as query string
    /// # Errors
    /// Error if the client has no credentials, on transport failure,
    /// non-2xx status or undecodable body
    pub async fn authorized_get_request<T, P>(
        &self,
        url: &str,
        params: &P,
    ) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = self
            .client
            .get(self.build_url(url)?)
            .headers(self.authorized_headers()?)
            .query(params);
        self.execute(request).await
    }

    /// Make an authenticated POST request, `body` is sent as json
    /// # Errors
    /// Error if the client has no credentials, on transport failure,
    /// non-2xx status or undecodable body
    pub async fn authorized_post_request<T, B>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .post(self.build_url(url)?)
            .headers(self.authorized_headers()?)
            .json(body);
        self.execute(request).await
    }

    /// Make an authenticated PATCH request, `body` is sent as json
    /// # Errors
    /// Error if the client has no credentials, on transport failure,
    /// non-2xx status or undecodable body
    pub async fn authorized_patch_request<T, B>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .client
            .patch(self.build_url(url)?)
            .headers(self.authorized_headers()?)
            .json(body);
        self.execute(request).await
    }

    /// Make an authenticated DELETE request, `params` are sent as query string
    /// # Errors
    /// Error if the client has no credentials, on transport failure,
    /// non-2xx status or undecodable body
    pub async fn authorized_delete_request<T, P>(
        &self,
        url: &str,
        params: &P,
    ) -> Result<T, GithubUserError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let request = self
            .client
            .delete(self.build_url(url)?)
            .headers(self.authorized_headers()?)
            .query(params);
        self.execute(request).await
    }
}
