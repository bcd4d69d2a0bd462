use clap::Parser;
use github_user::{github_user_main, GithubUserCli};
use std::process::exit;

#[tokio::main]
async fn main() {
    let args = GithubUserCli::parse();
    env_logger::builder()
        .filter_level(args.log_level())
        .format_target(false)
        .format_timestamp(None)
        .init();
    match github_user_main(args).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
}
