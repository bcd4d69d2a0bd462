//! Configuration handling
use std::{env, fmt, fs::read_to_string, path::PathBuf};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::errors::GithubUserError;

/// Environment variable holding the GitHub username
pub const ENV_USERNAME: &str = "GITHUB_USERNAME";

/// Environment variable holding the GitHub personal access token
pub const ENV_TOKEN: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Environment variable overriding the GitHub API url
pub const ENV_API_URL: &str = "GITHUB_API_URL";

/// Configuration data
#[derive(Default, Clone, Debug)]
pub struct GithubUserConfig {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,
}

/// Content of the configuration file
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
pub struct ConfigData {
    /// Github configuration
    pub github: Option<GithubConfig>,
}

/// Github configuration
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
pub struct GithubConfig {
    /// Github username
    pub username: Option<String>,

    /// Github personal access token
    pub token: Option<String>,

    /// Github API url
    pub api_url: Option<String>,
}

impl GithubUserConfig {
    /// Load the configuration from `config_path`, or from the default path
    /// # Errors
    /// Error if the home directory can't be found or the file isn't valid toml
    pub fn try_new(config_path: Option<PathBuf>) -> Result<Self, GithubUserError> {
        let config_path = match config_path {
            Some(p) => p,
            None => Self::get_config_path()?,
        };
        let config_data = if config_path.exists() {
            let contents = read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            log::debug!("No config file at {}", config_path.display());
            ConfigData::default()
        };
        Ok(GithubUserConfig {
            config_path,
            config_data,
        })
    }

    /// Get the path to the config file
    /// # Errors
    /// Error if the home directory can't be found
    pub fn get_config_path() -> Result<PathBuf, GithubUserError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err("Unable to get your home dir! home::home_dir() isn't working".into()),
        };
        Ok(home_dir
            .join(".config")
            .join(".github-user")
            .join("config.toml"))
    }

    /// Resolve the credentials from the environment, then from the config file
    /// # Errors
    /// Error if the username or the token is missing
    pub fn credentials(&self) -> Result<Credentials, GithubUserError> {
        Credentials::resolve(
            self.config_data.github.as_ref(),
            env::var(ENV_USERNAME).ok(),
            env::var(ENV_TOKEN).ok(),
        )
    }

    /// Github username from the environment, then from the config file
    pub fn username(&self) -> Option<String> {
        env::var(ENV_USERNAME)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| {
                self.config_data
                    .github
                    .as_ref()
                    .and_then(|g| g.username.clone())
            })
    }

    /// Github API url from the environment, then from the config file
    pub fn api_url(&self) -> Option<String> {
        env::var(ENV_API_URL).ok().filter(|u| !u.trim().is_empty()).or_else(|| {
            self.config_data
                .github
                .as_ref()
                .and_then(|g| g.api_url.clone())
        })
    }
}

/// Credentials used for Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Github username
    username: String,

    /// Github personal access token
    token: String,
}

impl Credentials {
    /// Create new credentials
    /// # Errors
    /// Error if the username or the token is blank
    pub fn new(
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, GithubUserError> {
        let username = username.into();
        let token = token.into();
        if username.trim().is_empty() {
            return Err(format!("Missing github username (set {ENV_USERNAME})").into());
        }
        if token.trim().is_empty() {
            return Err(format!("Missing github token (set {ENV_TOKEN})").into());
        }
        Ok(Self { username, token })
    }

    /// Pick each value from the environment first, then from the config file
    pub(crate) fn resolve(
        file: Option<&GithubConfig>,
        env_username: Option<String>,
        env_token: Option<String>,
    ) -> Result<Self, GithubUserError> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let username = non_blank(env_username)
            .or_else(|| file.and_then(|f| f.username.clone()))
            .unwrap_or_default();
        let token = non_blank(env_token)
            .or_else(|| file.and_then(|f| f.token.clone()))
            .unwrap_or_default();
        Self::new(username, token)
    }

    /// Github username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Github personal access token
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}
