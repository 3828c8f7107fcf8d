use clap::{Parser, Subcommand};
use updater_core::UpdateChecker;

#[derive(Parser)]
#[command(name = "ipa-updater")]
#[command(about = "Checks GitHub releases for a newer IPA build")]
struct Cli {
    /// Repository owner
    #[arg(long, default_value = "nezumi0627")]
    owner: String,

    /// Repository name
    #[arg(long, default_value = "nezu-app")]
    repo: String,

    /// Version of the installed app
    #[arg(long, default_value = "1.0")]
    current_version: String,

    /// Build number of the installed app
    #[arg(long, default_value = "1")]
    current_build: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a newer IPA build is available
    Check,
    /// Check and open the download URL of the latest IPA
    Download,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let checker = UpdateChecker::for_repo(
        &cli.owner,
        &cli.repo,
        &cli.current_version,
        &cli.current_build,
    );

    match cli.command {
        Commands::Check => {
            checker.check_for_updates().await;
            let state = checker.state().await;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Commands::Download => {
            checker.check_for_updates().await;
            let state = checker.state().await;
            if let Some(err) = state.error {
                return Err(err.into());
            }
            checker.download_ipa().await?;
            println!(
                "Opened download for {}",
                state.latest_version.as_deref().unwrap_or("latest release")
            );
        }
    }

    Ok(())
}
