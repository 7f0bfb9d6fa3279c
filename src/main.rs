//! Loyalty Client - command line access to a team's public loyalty data
//!
//! Prints the JSON response of one read endpoint.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loyalty_client::{ApiError, ClientConfig, LoyaltyClient};

#[derive(Parser, Debug)]
#[command(name = "loyalty_client", version, about = "Query a Botisimo loyalty team")]
struct Cli {
    /// Team name or full endpoint URL (overrides LOYALTY_TEAM)
    #[arg(long, global = true)]
    team: Option<String>,

    /// Response cache lifetime in milliseconds (overrides LOYALTY_CACHE_TTL_MS)
    #[arg(long, global = true)]
    ttl_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the team
    Team,
    /// Show the top users
    Leaderboard,
    /// List memberships
    Memberships,
    /// List tiers
    Tiers,
    /// List creators
    Creators,
    /// List missions
    Missions,
    /// Show one mission
    Mission { id: u64 },
    /// List shop items
    ShopItems,
    /// Show one shop item
    ShopItem { id: u64 },
    /// List events
    Events,
    /// Show one event
    Event { id: u64 },
    /// Print the URL of a media resource
    MediaUrl { resource_id: String },
}

/// Main entry point for the loyalty CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables, then apply flags
/// 3. Run the requested command and print its JSON
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "loyalty_client=info", can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loyalty_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(team) = cli.team {
        config.team = team;
    }
    if let Some(ttl_ms) = cli.ttl_ms {
        config = config.with_cache_ttl_ms(ttl_ms);
    }
    if config.team.is_empty() {
        anyhow::bail!("no team given; pass --team or set LOYALTY_TEAM");
    }

    let client = LoyaltyClient::new(config).context("failed to build HTTP client")?;
    info!(endpoint = client.endpoint(), "client ready");

    match run(&client, cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            let body = serde_json::to_string(&err.to_response())?;
            eprintln!("{body}");
            std::process::exit(1);
        }
    }
}

async fn run(client: &LoyaltyClient, command: Command) -> Result<String, ApiError> {
    debug!(?command, "running command");

    match command {
        Command::Team => pretty(&client.get_team().await?),
        Command::Leaderboard => pretty(&client.list_users().await?),
        Command::Memberships => pretty(&client.list_memberships().await?),
        Command::Tiers => pretty(&client.list_tiers().await?),
        Command::Creators => pretty(&client.list_creators().await?),
        Command::Missions => pretty(&client.list_missions().await?),
        Command::Mission { id } => pretty(&client.read_mission(id).await?),
        Command::ShopItems => pretty(&client.list_shop_items().await?),
        Command::ShopItem { id } => pretty(&client.read_shop_item(id).await?),
        Command::Events => pretty(&client.list_events().await?),
        Command::Event { id } => pretty(&client.read_event(id).await?),
        Command::MediaUrl { resource_id } => Ok(client.media_url(resource_id)),
    }
}

fn pretty<T: Serialize>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
