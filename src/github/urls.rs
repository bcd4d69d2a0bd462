//! Public profile urls
use super::{GIST_URL, GITHUB_URL};

/// Builder of the public facing urls of a user, no request is sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUrls {
    /// Pinned username
    username_to_use: Option<String>,
}

impl ProfileUrls {
    /// Create a new builder, `username_to_use` replaces every username argument
    pub fn new(username_to_use: Option<String>) -> Self {
        Self { username_to_use }
    }

    /// Pinned username
    pub fn username_to_use(&self) -> Option<&str> {
        self.username_to_use.as_deref()
    }

    /// The pinned username if set, `username` otherwise
    pub(crate) fn effective_username<'a>(&'a self, username: &'a str) -> &'a str {
        match self.username_to_use.as_deref() {
            Some(pinned) if !pinned.is_empty() => pinned,
            _ => username,
        }
    }

    /// `https://github.com/{user}`
    pub fn profile(&self, username: &str) -> String {
        format!("{GITHUB_URL}/{}", self.effective_username(username))
    }

    /// `https://github.com/{user}?tab=followers`
    pub fn followers(&self, username: &str) -> String {
        format!("{}?tab=followers", self.profile(username))
    }

    /// `https://github.com/{user}?tab=following`
    pub fn following(&self, username: &str) -> String {
        format!("{}?tab=following", self.profile(username))
    }

    /// `https://gist.github.com/{user}`
    pub fn gists(&self, username: &str) -> String {
        format!("{GIST_URL}/{}", self.effective_username(username))
    }

    /// `https://github.com/{user}?tab=repositories`
    pub fn repositories(&self, username: &str) -> String {
        format!("{}?tab=repositories", self.profile(username))
    }

    /// `https://github.com/{user}?tab=stars`
    pub fn stars(&self, username: &str) -> String {
        format!("{}?tab=stars", self.profile(username))
    }

    /// Every url with its name, in display order
    pub fn all(&self, username: &str) -> [(&'static str, String); 6] {
        [
            ("profile", self.profile(username)),
            ("followers", self.followers(username)),
            ("following", self.following(username)),
            ("gists", self.gists(username)),
            ("repositories", self.repositories(username)),
            ("stars", self.stars(username)),
        ]
    }
}
