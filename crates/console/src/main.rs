use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::GameState;
use clap::Parser;
use console::run;
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play chess against a fixed-depth minimax engine.
#[derive(Parser, Debug)]
#[command(name = "play", version, about)]
struct Args {
    /// Search depth in plies (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Engine config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Print the effective engine config and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
        config.validate()?;
    }

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut state = match &args.fen {
        Some(fen) => GameState::from_fen(fen).context("parsing --fen")?,
        None => GameState::new(),
    };

    info!(depth = config.depth, "starting game");
    let mut engine = MinimaxEngine::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut state, &mut engine, stdin.lock(), &mut stdout)?;
    Ok(())
}
