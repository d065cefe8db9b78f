use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use serpix_server::config::load_sim_config;
use serpix_server::game_loop::spawn_game_loop;
use serpix_server::state::{AppState, GameLoopCommand};
use serpix_sim::SimConfig;

/// Frames buffered per subscriber before a slow socket starts lagging.
const FRAME_BUFFER: usize = 256;

#[derive(Parser, Debug)]
#[command(name = "serpix-server")]
#[command(about = "Serpix multiplayer snake arena server")]
struct Cli {
    /// TOML file with `seed` and a `[game]` table.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Overrides the config seed. Defaults to the clock when no config is given.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("serpix_server=info,serpix_sim=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_sim_config(path)?,
        None => SimConfig {
            seed: clock_seed(),
            ..SimConfig::default()
        },
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!(seed = config.seed, bots = config.game.bot_count, "starting arena");

    let (frames, _) = broadcast::channel(FRAME_BUFFER);
    let (command_tx, game_loop) = spawn_game_loop(config, frames.clone())?;
    let state = AppState::new(command_tx, frames);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("serpix-server listening on http://{addr}");

    axum::serve(listener, serpix_server::router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let _ = state.command_tx.send(GameLoopCommand::Shutdown);
    if game_loop.join().is_err() {
        warn!("game loop thread panicked");
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_else(|_| SimConfig::default().seed)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
