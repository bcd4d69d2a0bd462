//! GitHub API module.
pub(crate) mod client;
pub(crate) mod urls;
pub(crate) mod user;

/// GitHub URL
const GITHUB_URL: &str = "https://github.com";

/// GitHub Gist URL
const GIST_URL: &str = "https://gist.github.com";

/// GitHub API media type
const GITHUB_API_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Default search page
const DEFAULT_PAGE: u32 = 1;

/// Default number of search results per page
const DEFAULT_RESULTS_PER_PAGE: u32 = 10;
