//! Kalah: a command line implementation of the Kalah board game.
//!
//! ## Usage
//!
//! - `kalah` - Play an interactive game on the terminal
//! - `kalah --seven-five --clockwise` - 7 houses with 5 seeds, drawn clockwise
//! - `kalah demo --games 100` - Run random playouts and print a summary
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kalah::config::{Direction, GameConfig};
use kalah::console::Console;
use kalah::display::BoardView;
use kalah::game::{Game, Winner};
use kalah::playout::random_playout;

/// A command line implementation of the Kalah board game
#[derive(Parser)]
#[command(name = "kalah")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct BoardArgs {
    /// Use clockwise sowing direction
    #[arg(short, long, global = true)]
    clockwise: bool,

    /// Use 7 houses per player with 5 seeds each (default: 5 houses, 4 seeds)
    #[arg(short, long, global = true)]
    seven_five: bool,

    /// Override the number of houses per player
    #[arg(long, global = true)]
    houses: Option<usize>,

    /// Override the number of seeds per house
    #[arg(long, global = true)]
    seeds: Option<u32>,
}

impl BoardArgs {
    fn config(&self) -> GameConfig {
        let mut config = if self.seven_five {
            GameConfig::seven_five()
        } else {
            GameConfig::five_four()
        };
        if let Some(houses) = self.houses {
            config.houses_per_player = houses;
        }
        if let Some(seeds) = self.seeds {
            config.seeds_per_house = seeds;
        }
        let direction = if self.clockwise {
            Direction::Clockwise
        } else {
            Direction::Anticlockwise
        };
        config.with_direction(direction)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,
    /// Run random playouts and print a summary
    Demo {
        /// Number of games to play
        #[arg(short, long, default_value_t = 10)]
        games: usize,

        /// Random seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.board.config();

    match cli.command {
        Some(Commands::Demo { games, seed }) => run_demo(config, games, seed),
        Some(Commands::Play) | None => run_play(config),
    }
}

fn run_play(config: GameConfig) -> Result<()> {
    let game = Game::new(config)?;
    info!(?config, "starting game");
    println!("Welcome to Kalah!");

    let mut console = Console::new(game);
    console.run(io::stdin().lock(), io::stdout())?;
    Ok(())
}

fn run_demo(config: GameConfig, games: usize, seed: u64) -> Result<()> {
    println!("Kalah: {games} random playouts (seed {seed})\n");

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut wins = [0usize; 2];
    let mut ties = 0;
    let mut total_moves = 0;
    let mut last = None;

    for _ in 0..games {
        let mut game = Game::new(config)?;
        let playout = random_playout(&mut game, &mut rng);
        match playout.result.winner {
            Winner::Side(side) => wins[side.index()] += 1,
            Winner::Tie => ties += 1,
        }
        total_moves += playout.moves;
        last = Some(game);
    }

    if let Some(game) = last {
        println!("Final board of the last game:");
        print!("{}", BoardView::new(game.board(), config.direction));
        println!();
    }
    println!("Player 1 wins: {}", wins[0]);
    println!("Player 2 wins: {}", wins[1]);
    println!("Ties:          {ties}");
    if games > 0 {
        println!("Average moves: {:.1}", total_moves as f64 / games as f64);
    }
    Ok(())
}
