//! CryptoLens Dashboard
//!
//! Terminal front end: mounts the dashboard against the analysis backend and
//! prints the sections that loaded.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Interval;

use cryptolens::config::{generate_default_config, Config, DefaultLoad};
use cryptolens::{
    render, render_json, BackendClient, DashboardState, Loader, RenderOptions, WalletProvider,
};

#[derive(Parser)]
#[command(name = "cryptolens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token, wallet, sentiment and NFT dashboard for a Solana analysis backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis backend URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Token address to look up
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Wallet address to look up
    #[arg(long, global = true)]
    pub wallet: Option<String>,

    /// NFT mint address to look up
    #[arg(long, global = true)]
    pub nft: Option<String>,

    /// Sentiment search query
    #[arg(long, global = true)]
    pub query: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dashboard once and print it
    Show {
        /// Reprint the page after every slot update
        #[arg(long)]
        live: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Reload the dashboard periodically
    Watch {
        /// Seconds between reloads
        #[arg(short, long, default_value = "30")]
        interval: u64,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the wallet connection context and probe its RPC endpoint
    Wallet,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Clone, Default)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// List slots that failed to load
    #[arg(long)]
    show_errors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = load_config(&cli)?;
    cryptolens::logging::init(&loaded.config.logging, "");
    loaded.log();
    let config = loaded.config;

    tracing::debug!("CryptoLens v{}", env!("CARGO_PKG_VERSION"));

    let command = cli.command.unwrap_or(Commands::Show {
        live: false,
        output: OutputArgs::default(),
    });

    match command {
        Commands::Show { live, output } => {
            let provider = wallet_provider(&config)?;
            let loader = build_loader(&config)?;
            let options = render_options(&provider, &output);

            let mut mount = loader.mount();
            if live {
                print_page(&mount.snapshot(), &options, output.json)?;
                while let Some(state) = mount.changed().await {
                    print_page(&state, &options, output.json)?;
                }
            } else {
                let state = mount.settled().await;
                print_page(&state, &options, output.json)?;
            }
        }

        Commands::Watch { interval, output } => {
            let provider = wallet_provider(&config)?;
            let loader = build_loader(&config)?;
            let options = render_options(&provider, &output);
            let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));

            loop {
                let stop = async {
                    let _ = tokio::signal::ctrl_c().await;
                };
                let Some(state) = next_load(&mut ticker, &loader, stop).await else {
                    tracing::info!("Stopping watch");
                    break;
                };

                if !output.json {
                    println!("[{}]", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
                }
                print_page(&state, &options, output.json)?;
            }
        }

        Commands::Wallet => {
            let provider = wallet_provider(&config)?;
            println!("{}", provider.describe());

            let connection = provider.connection()?;
            match connection.health().await {
                Ok(health) => println!("Health: {}", health),
                Err(e) => println!("Health: unavailable ({})", e),
            }
            match connection.version().await {
                Ok(version) => println!("Node version: {}", version.solana_core),
                Err(e) => println!("Node version: unavailable ({})", e),
            }
        }

        Commands::Config { output } => write_default_config(output.as_deref())?,
    }

    Ok(())
}

/// Load config and apply CLI overrides; logging is not up yet, so the
/// returned [`DefaultLoad`] is logged by the caller
fn load_config(cli: &Cli) -> anyhow::Result<DefaultLoad> {
    let mut loaded = match &cli.config {
        Some(path) => DefaultLoad {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            errors: Vec::new(),
        },
        None => Config::load_default(),
    };
    let config = &mut loaded.config;

    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config.targets.token_address = Some(token.clone());
    }
    if let Some(wallet) = &cli.wallet {
        config.targets.wallet_address = Some(wallet.clone());
    }
    if let Some(nft) = &cli.nft {
        config.targets.nft_address = Some(nft.clone());
    }
    if let Some(query) = &cli.query {
        config.targets.sentiment_query = query.clone();
    }

    Ok(loaded)
}

/// Wait for the next tick and load a fresh mount, unless `stop` fires first.
/// An interrupted load drops its mount, aborting the requests.
async fn next_load(
    ticker: &mut Interval,
    loader: &Loader,
    stop: impl Future<Output = ()>,
) -> Option<DashboardState> {
    tokio::select! {
        state = async {
            ticker.tick().await;
            loader.load().await
        } => Some(state),
        _ = stop => None,
    }
}

fn wallet_provider(config: &Config) -> anyhow::Result<WalletProvider> {
    WalletProvider::new(&config.wallet).context("Invalid wallet configuration")
}

fn build_loader(config: &Config) -> anyhow::Result<Loader> {
    let client = BackendClient::new(config.backend.clone())
        .context("Failed to create HTTP client")?;
    tracing::info!("Backend: {}", client.config().base_url);
    Ok(Loader::new(Arc::new(client), config.targets.clone()))
}

fn render_options(provider: &WalletProvider, output: &OutputArgs) -> RenderOptions {
    RenderOptions {
        header: Some(provider.describe()),
        show_errors: output.show_errors,
    }
}

fn print_page(state: &DashboardState, options: &RenderOptions, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&render_json(state, options))?);
    } else {
        println!("{}", render(state, options));
    }
    Ok(())
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Wrote default config to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
