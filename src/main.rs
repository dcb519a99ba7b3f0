use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;

use monopoly_sim::{Game, GameConfig, RandomDice};

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate a game of Monopoly", long_about = None)]
struct Args {
    /// Number of rounds to play
    #[arg(short, long, default_value_t = 20)]
    turns: u32,

    /// Number of players (1 to 6)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after every turn, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = GameConfig::new(args.turns, args.players)
        .with_turn_delay(Duration::from_millis(args.delay_ms));

    let dice = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            RandomDice::seeded(seed)
        }
        None => RandomDice::from_entropy(),
    };

    let start = Instant::now();

    let mut game = Game::new(config, dice, io::stdout())?;
    game.play()?;

    log::info!("Time elapsed: {:?}", start.elapsed());

    Ok(())
}
