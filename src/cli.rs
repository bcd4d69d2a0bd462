//! Command line options for the github-user tool
use crate::{
    api::GITHUB_API_URL,
    config::GithubUserConfig,
    errors::GithubUserError,
    github::{client::GithubClient, urls::ProfileUrls},
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// github-user - Search GitHub users and show their profiles
#[derive(Parser, Default, Clone, Debug)]
#[command(version, about)]
pub struct GithubUserCli {
    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pin a username, it replaces the username of every command
    #[arg(short = 'u', long)]
    pub pin: Option<String>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands of the github-user tool
#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Search users matching a text
    Search {
        /// Search text, GitHub search qualifiers are allowed
        text: String,

        /// Page to fetch (starts at 1)
        #[arg(short, long)]
        page: Option<u32>,

        /// Number of results per page
        #[arg(long)]
        per_page: Option<u32>,
    },

    /// Show the details of a user
    User {
        /// Username, defaults to the configured username
        username: Option<String>,
    },

    /// Show the public urls of a user
    Urls {
        /// Username, defaults to the configured username
        username: Option<String>,
    },
}

impl GithubUserCli {
    /// Log level matching the verbose flag
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Print a value as pretty json
fn print_json<T: Serialize>(value: &T) -> Result<(), GithubUserError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run the github-user tool with the provided command line options
/// # Errors
/// Error if the configuration is invalid or a request fails
pub async fn github_user_main(args: GithubUserCli) -> Result<(), GithubUserError> {
    dotenv::dotenv().ok();
    let config = GithubUserConfig::try_new(args.config.clone())?;
    if args.show_config_path {
        println!("{}", config.config_path.display());
        return Ok(());
    }
    let Some(command) = args.command else {
        return Err("No command given, see --help".into());
    };
    let pin = args.pin;
    match command {
        Command::Urls { username } => {
            let username = username.or_else(|| config.username()).unwrap_or_default();
            for (name, url) in ProfileUrls::new(pin).all(&username) {
                println!("{name:<13}{url}");
            }
        }
        Command::Search {
            text,
            page,
            per_page,
        } => {
            let client = build_client(&config, pin)?;
            let result = client.get_github_users(&text, page, per_page).await?;
            log::info!(
                "{} users found, showing {}",
                result.total_count,
                result.items.len()
            );
            print_json(&result)?;
        }
        Command::User { username } => {
            let client = build_client(&config, pin)?;
            let username = username.or_else(|| config.username()).unwrap_or_default();
            let detail = client.get_github_user_details(&username).await?;
            print_json(&detail)?;
        }
    }
    Ok(())
}

/// Build the client from the configuration
fn build_client(
    config: &GithubUserConfig,
    pin: Option<String>,
) -> Result<GithubClient, GithubUserError> {
    let credentials = config.credentials()?;
    let api_url = config.api_url().unwrap_or_else(|| GITHUB_API_URL.into());
    log::debug!("Using {api_url} as {}", credentials.username());
    GithubClient::with_base_url(&api_url, credentials, pin)
}
