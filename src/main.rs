//! Gosolve command line: solve small Go positions or watch a playout.
//!
//! ## Usage
//!
//! - `gosolve solve --size 3 --color black --seconds 30`
//! - `gosolve solve --size 4 --moves C2,B2,B3` (setup moves alternate from Black)
//! - `gosolve demo`

use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use gosolve::board::{Color, GoBoard, parse_coord, str_coord};
use gosolve::constants::PASS;
use gosolve::policy::{random_move, simulate};
use gosolve::solver::solve;

/// Exhaustive win/loss solver for small Go boards
#[derive(Parser)]
#[command(name = "gosolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a position: can the given color force a win?
    Solve {
        /// Board dimension
        #[arg(short, long, default_value_t = 3)]
        size: usize,
        /// Color to solve for (black/white)
        #[arg(short, long, default_value = "black")]
        color: String,
        /// Time budget in seconds
        #[arg(short = 't', long, default_value_t = 30.0)]
        seconds: f64,
        /// Setup moves ("C2,B2,B3"), played alternately starting with Black
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,
    },
    /// Solve a small board and show a random playout
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Solve {
            size,
            color,
            seconds,
            moves,
        }) => run_solve(size, &color, seconds, &moves),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_solve(size: usize, color: &str, seconds: f64, moves: &[String]) -> anyhow::Result<()> {
    let color: Color = color.parse().map_err(anyhow::Error::msg)?;
    let mut board = GoBoard::new(size);
    for name in moves {
        let pt = parse_coord(name, size)
            .with_context(|| format!("bad coordinate {name:?} for size {size}"))?;
        if pt == PASS {
            bail!("this ruleset has no pass move; the game ends when a player is stuck");
        }
        let to_play = board.to_play();
        board
            .play(pt, to_play)
            .with_context(|| format!("setup move {name} for {to_play}"))?;
    }

    println!("{board}");
    let result = solve(&mut board, color, Duration::from_secs_f64(seconds));
    if result.timed_out {
        println!("time budget exhausted after {} nodes; verdict is a guess", result.nodes);
    }
    match (result.win, result.winning_move) {
        (true, Some(mv)) => println!(
            "{color} wins; winning move {} ({} nodes)",
            str_coord(mv, size),
            result.nodes
        ),
        (true, None) => println!("{color} wins ({} nodes)", result.nodes),
        (false, _) => println!("{color} cannot force a win ({} nodes)", result.nodes),
    }
    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("Gosolve: exhaustive solver for small Go boards\n");

    println!("=== Solving an empty 3x3 board for Black ===");
    let mut board = GoBoard::new(3);
    let result = solve(&mut board, Color::Black, Duration::from_secs(60));
    match result.winning_move {
        Some(mv) => println!(
            "black wins: {} (move {}, {} nodes)\n",
            result.win,
            str_coord(mv, 3),
            result.nodes
        ),
        None => println!("black wins: {} ({} nodes)\n", result.win, result.nodes),
    }

    println!("=== Random playout on 5x5 ===");
    let mut board = GoBoard::new(5);
    let winner = simulate(&mut board, random_move);
    println!("{board}");
    println!("{} moves, {winner} made the last one", board.moves().len());
    Ok(())
}
