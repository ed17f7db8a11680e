use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mnk::{Game, GameConfig};

/// Walk the full game tree to increasing depths and report node counts
/// and throughput.
#[derive(Parser)]
#[command(name = "perft", about = "N-in-a-row game-tree enumeration benchmark")]
struct Cli {
    /// Side length of the square board
    #[arg(long, default_value_t = 3)]
    board_size: usize,

    /// Consecutive marks required to win
    #[arg(long, default_value_t = 3)]
    match_length: usize,

    /// Deepest ply to enumerate (clamped to the cell count)
    #[arg(long, default_value_t = 9)]
    max_depth: usize,

    /// Read board_size/match_length from a TOML file instead
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig {
            board_size: cli.board_size,
            match_length: cli.match_length,
        },
    };

    let mut game = Game::new(config).context("invalid game configuration")?;
    println!(
        "board {size}x{size}, match length {len}",
        size = config.board_size,
        len = config.match_length,
    );

    for depth in 0..=cli.max_depth {
        let start = Instant::now();
        let nodes = game.perft(depth);
        let secs = start.elapsed().as_secs_f64();
        let nps = nodes as f64 / secs;

        println!("depth {depth}: {nodes} nodes in {secs:.3}s ({:.2} Mnps)", nps / 1_000_000.0);
    }

    Ok(())
}
