//! # github-user
//!
//! Search GitHub users, fetch their details and build their public profile urls
//!
//! ## Usage
//!
//! ```txt
//! Usage: github-user [OPTIONS] [COMMAND]
//!
//! Commands:
//!   search  Search users matching a text
//!   user    Show the details of a user
//!   urls    Show the public urls of a user
//!   help    Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -c, --config <CONFIG>  Custom configuration file path
//!   -u, --pin <PIN>        Pin a username, it replaces the username of every command
//!       --show-config-path Show the current config path
//!   -v, --verbose...       Verbose mode (-v, -vv)
//!   -h, --help             Print help
//! ```
//!
//! ## Library
//!
//! ```no_run
//! use github_user::{Credentials, GithubClient};
//!
//! # async fn run() -> Result<(), github_user::GithubUserError> {
//! let client = GithubClient::new(Credentials::new("octocat", "ghp_...")?, None)?;
//! let found = client.get_github_users("tom", None, Some(5)).await?;
//! for user in found.items {
//!     println!("{}", client.get_github_profile_url(&user.login));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod api;
pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;

mod github;

pub use api::{ApiClient, GITHUB_API_URL};
pub use cli::{github_user_main, Command, GithubUserCli};
pub use config::{ConfigData, Credentials, GithubConfig, GithubUserConfig};
pub use errors::{GithubUserError, GithubUserErrorKind};
pub use github::client::{GithubClient, SearchUsersQuery};
pub use github::urls::ProfileUrls;
pub use github::user::{GithubSearchResult, GithubUserDetail, GithubUserSummary};
