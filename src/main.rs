use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use version_gate::action::{self, ActionParams};
use version_gate::output;
use version_gate::source::manifest::GitHubManifestSource;
use version_gate::source::tags::GitHubTagSource;

#[derive(Parser)]
#[command(name = "version-gate")]
#[command(
    version,
    about = "Checks whether a branch's package version was bumped since the last release tag"
)]
struct Cli {
    /// Repository owner (user or organization).
    #[arg(long, env = "INPUT_OWNER")]
    owner: String,

    /// Repository name.
    #[arg(long, env = "INPUT_REPO")]
    repo: String,

    /// Branch name, bare or as a refs/heads/ qualified ref.
    #[arg(long, env = "INPUT_BRANCH")]
    branch: String,

    /// Access token for the tag listing API.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let params = ActionParams {
        owner: cli.owner,
        repo: cli.repo,
        branch: cli.branch,
        github_token: cli.github_token,
    };

    let manifest = GitHubManifestSource::default();
    let tags = GitHubTagSource::github(params.github_token.clone());

    let decision = action::evaluate(&params, &manifest, &tags).await?;
    info!(
        "{} -> {} (upgraded: {}, beta: {})",
        decision.from_version,
        decision.to_version,
        decision.is_upgraded_version,
        decision.is_release_beta
    );

    output::publish(&decision)?;
    Ok(())
}
