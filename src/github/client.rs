//! Github client
use super::{
    urls::ProfileUrls,
    user::{GithubSearchResult, GithubUserDetail},
    DEFAULT_PAGE, DEFAULT_RESULTS_PER_PAGE, GITHUB_API_MEDIA_TYPE,
};
use crate::{
    api::{ApiClient, GITHUB_API_URL},
    config::Credentials,
    errors::GithubUserError,
};
use reqwest::header::ACCEPT;
use serde::Serialize;
use url::form_urlencoded;
use urlencoding::encode;

/// Query of `/search/users`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchUsersQuery {
    /// Search text
    pub q: String,

    /// Page number
    pub page: u32,

    /// Results per page
    pub per_page: u32,
}

impl SearchUsersQuery {
    /// Build the query, a missing or zero `page`/`per_page` falls back to its default
    pub fn new(search_text: &str, page: Option<u32>, results_per_page: Option<u32>) -> Self {
        Self {
            q: search_text.to_string(),
            page: page.filter(|p| *p != 0).unwrap_or(DEFAULT_PAGE),
            per_page: results_per_page
                .filter(|p| *p != 0)
                .unwrap_or(DEFAULT_RESULTS_PER_PAGE),
        }
    }

    /// Query string sent to the API
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.q)
            .append_pair("page", &self.page.to_string())
            .append_pair("per_page", &self.per_page.to_string())
            .finish()
    }
}

/// Github client
///
/// When a username is pinned, it replaces the username given to every method.
#[derive(Debug, Clone)]
pub struct GithubClient {
    /// HTTP client bound to the GitHub API
    api: ApiClient,

    /// Public urls, holds the pinned username
    urls: ProfileUrls,
}

impl GithubClient {
    /// Create a new GithubClient for `api.github.com`
    /// # Errors
    /// Error if the HTTP client can't be built
    pub fn new(
        credentials: Credentials,
        username_to_use: Option<String>,
    ) -> Result<Self, GithubUserError> {
        Self::with_base_url(GITHUB_API_URL, credentials, username_to_use)
    }

    /// Create a new GithubClient for another API url (GitHub Enterprise)
    /// # Errors
    /// Error if `base_url` is invalid or the HTTP client can't be built
    pub fn with_base_url(
        base_url: &str,
        credentials: Credentials,
        username_to_use: Option<String>,
    ) -> Result<Self, GithubUserError> {
        let api = ApiClient::new(
            base_url,
            [(ACCEPT.as_str(), GITHUB_API_MEDIA_TYPE)],
            Some(credentials),
        )?;
        Ok(Self {
            api,
            urls: ProfileUrls::new(username_to_use),
        })
    }

    /// Underlying HTTP client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Public url builder sharing this client's pinned username
    pub fn urls(&self) -> &ProfileUrls {
        &self.urls
    }

    /// Get users matching a search text
    /// # Errors
    /// Error on transport failure or non-2xx status
    pub async fn get_github_users(
        &self,
        search_text: &str,
        page: Option<u32>,
        results_per_page: Option<u32>,
    ) -> Result<GithubSearchResult, GithubUserError> {
        let query = SearchUsersQuery::new(search_text, page, results_per_page);
        log::info!(
            "Searching users matching '{}' (page {}, {} per page)",
            query.q,
            query.page,
            query.per_page
        );
        self.api
            .authorized_get_request("/search/users", &query)
            .await
    }

    /// Get the details of a single user
    ///
    /// An empty username requests `/users/` as is.
    /// # Errors
    /// Error on transport failure or non-2xx status
    pub async fn get_github_user_details(
        &self,
        username: &str,
    ) -> Result<GithubUserDetail, GithubUserError> {
        let url = format!("/users/{}", encode(self.urls.effective_username(username)));
        self.api.authorized_get_request(&url, &()).await
    }

    /// Public profile url
    pub fn get_github_profile_url(&self, username: &str) -> String {
        self.urls.profile(username)
    }

    /// Public followers url
    pub fn get_github_followers_url(&self, username: &str) -> String {
        self.urls.followers(username)
    }

    /// Public following url
    pub fn get_github_following_url(&self, username: &str) -> String {
        self.urls.following(username)
    }

    /// Public gists url, hosted on `gist.github.com`
    pub fn get_github_gists_url(&self, username: &str) -> String {
        self.urls.gists(username)
    }

    /// Public repositories url
    pub fn get_github_repositories_url(&self, username: &str) -> String {
        self.urls.repositories(username)
    }

    /// Public stars url
    pub fn get_github_stars_url(&self, username: &str) -> String {
        self.urls.stars(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::GithubUserErrorKind,
        github::user::tests::{octocat_detail, octocat_summary},
    };
    use mockito::Matcher;
    use serde_json::json;

    /// base64("octocat:ghp_secret")
    const BASIC: &str = "Basic b2N0b2NhdDpnaHBfc2VjcmV0";

    fn credentials() -> Credentials {
        Credentials::new("octocat", "ghp_secret").unwrap()
    }

    fn client(pinned: Option<&str>) -> GithubClient {
        GithubClient::new(credentials(), pinned.map(String::from)).unwrap()
    }

    fn search_matcher(q: &str, page: &str, per_page: &str) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), q.into()),
            Matcher::UrlEncoded("page".into(), page.into()),
            Matcher::UrlEncoded("per_page".into(), per_page.into()),
        ])
    }

    #[test]
    fn search_query_defaults() {
        for (page, per_page) in [(None, None), (Some(0), Some(0)), (None, Some(0))] {
            let query = SearchUsersQuery::new("rust", page, per_page);
            assert_eq!(query.page, 1);
            assert_eq!(query.per_page, 10);
            assert_eq!(query.query_string(), "q=rust&page=1&per_page=10");
        }
    }

    #[test]
    fn search_query_echoes_values() {
        let query = SearchUsersQuery::new("tom repos:>42", Some(3), Some(50));
        assert_eq!(query.query_string(), "q=tom+repos%3A%3E42&page=3&per_page=50");
        let query = SearchUsersQuery::new("x", Some(7), None);
        assert_eq!(query.query_string(), "q=x&page=7&per_page=10");
    }

    #[test]
    fn pinned_username_wins() {
        let client = client(Some("alice"));
        assert_eq!(client.get_github_profile_url("bob"), "https://github.com/alice");
        assert_eq!(
            client.get_github_stars_url("bob"),
            "https://github.com/alice?tab=stars"
        );
        assert_eq!(client.get_github_gists_url("bob"), "https://gist.github.com/alice");
    }

    #[test]
    fn url_builders() {
        let client = client(None);
        assert_eq!(client.get_github_profile_url("bob"), "https://github.com/bob");
        assert_eq!(
            client.get_github_followers_url("bob"),
            "https://github.com/bob?tab=followers"
        );
        assert_eq!(
            client.get_github_following_url("bob"),
            "https://github.com/bob?tab=following"
        );
        assert_eq!(client.get_github_gists_url("bob"), "https://gist.github.com/bob");
        assert_eq!(
            client.get_github_repositories_url("bob"),
            "https://github.com/bob?tab=repositories"
        );
        assert_eq!(
            client.get_github_stars_url("bob"),
            "https://github.com/bob?tab=stars"
        );
    }

    #[test]
    fn accept_header_is_bound() {
        let client = client(None);
        assert_eq!(client.api().headers()[ACCEPT], GITHUB_API_MEDIA_TYPE);
        assert_eq!(client.api().base_url().as_str(), "https://api.github.com/");
    }

    #[tokio::test]
    async fn search_users() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/users")
            .match_query(search_matcher("octo", "2", "5"))
            .match_header("accept", GITHUB_API_MEDIA_TYPE)
            .match_header("authorization", BASIC)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "total_count": 1,
                    "incomplete_results": false,
                    "items": [octocat_summary()]
                })
                .to_string(),
            )
            .create_async()
            .await;
        let client = GithubClient::with_base_url(&server.url(), credentials(), None).unwrap();
        let result = client
            .get_github_users("octo", Some(2), Some(5))
            .await
            .unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].login, "octocat");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_users_defaults() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/users")
            .match_query(search_matcher("octo", "1", "10"))
            .with_status(200)
            .with_body(r#"{"total_count":0,"incomplete_results":false,"items":[]}"#)
            .create_async()
            .await;
        let client = GithubClient::with_base_url(&server.url(), credentials(), None).unwrap();
        let result = client.get_github_users("octo", Some(0), None).await.unwrap();
        assert!(result.items.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn user_details_uses_pinned_username() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/octocat")
            .match_header("authorization", BASIC)
            .with_status(200)
            .with_body(octocat_detail().to_string())
            .create_async()
            .await;
        let client =
            GithubClient::with_base_url(&server.url(), credentials(), Some("octocat".into()))
                .unwrap();
        let detail = client.get_github_user_details("someone-else").await.unwrap();
        assert_eq!(detail.summary.login, "octocat");
        assert_eq!(detail.name.as_deref(), Some("The Octocat"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn user_details_without_username_targets_users_root() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;
        let client = GithubClient::with_base_url(&server.url(), credentials(), None).unwrap();
        let err = client.get_github_user_details("").await.unwrap_err();
        assert_eq!(err.kind(), &GithubUserErrorKind::Http);
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn unauthorized_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/users")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;
        let client = GithubClient::with_base_url(&server.url(), credentials(), None).unwrap();
        let err = client.get_github_users("octo", None, None).await.unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
        assert_eq!(err.body(), Some(r#"{"message":"Bad credentials"}"#));
    }
}
