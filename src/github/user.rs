//! Github user structs
use serde::{Deserialize, Serialize};

/// A user as returned in the search results
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GithubUserSummary {
    /// Username
    pub login: String,

    /// User ID
    pub id: u64,

    /// GraphQL node ID
    pub node_id: String,

    /// Avatar URL
    pub avatar_url: String,

    /// Gravatar ID, usually empty
    pub gravatar_id: String,

    /// API URL of the user
    pub url: String,

    /// Public profile URL
    pub html_url: String,

    /// API URL of the followers
    pub followers_url: String,

    /// API URL template of the followed users
    pub following_url: String,

    /// API URL template of the gists
    pub gists_url: String,

    /// API URL template of the starred repositories
    pub starred_url: String,

    /// API URL of the watched repositories
    pub subscriptions_url: String,

    /// API URL of the organizations
    pub organizations_url: String,

    /// API URL of the repositories
    pub repos_url: String,

    /// API URL template of the events
    pub events_url: String,

    /// API URL of the received events
    pub received_events_url: String,

    /// Account type (`User`, `Organization`, `Bot`)
    #[serde(rename = "type")]
    pub user_type: String,

    /// Whether the user is a GitHub administrator
    pub site_admin: bool,

    /// Search relevance, only set in search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Full profile of a single user
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GithubUserDetail {
    /// Fields shared with the search results
    #[serde(flatten)]
    pub summary: GithubUserSummary,

    /// Display name
    pub name: Option<String>,

    /// Company
    pub company: Option<String>,

    /// Blog URL, empty when unset
    #[serde(default)]
    pub blog: String,

    /// Location
    pub location: Option<String>,

    /// Public email
    pub email: Option<String>,

    /// Available for hire
    pub hireable: Option<bool>,

    /// Biography
    pub bio: Option<String>,

    /// Twitter username
    pub twitter_username: Option<String>,

    /// Number of public repositories
    pub public_repos: u64,

    /// Number of public gists
    pub public_gists: u64,

    /// Number of followers
    pub followers: u64,

    /// Number of followed users
    pub following: u64,

    /// Creation date (ISO 8601)
    pub created_at: String,

    /// Last update date (ISO 8601)
    pub updated_at: String,
}

/// Envelope of `/search/users`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GithubSearchResult {
    /// Total number of matching users
    pub total_count: u64,

    /// Whether the search timed out before collecting every result
    pub incomplete_results: bool,

    /// Users of the requested page
    pub items: Vec<GithubUserSummary>,
}
