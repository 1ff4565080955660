//! Dotbox: a Dots and Boxes engine to watch or benchmark.
//!
//! ## Usage
//!
//! - `dotbox` - Watch one hard-vs-medium game on a 3x3 board
//! - `dotbox demo --rows 4 --cols 4 --one extreme --two hard --seed 7`
//! - `dotbox match --games 200 --one hard --two easy` - Self-play tally

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;

use dotbox::board::{Board, Player};
use dotbox::strategy::{select_move, Difficulty};

/// Dotbox: a difficulty-tiered Dots and Boxes engine
#[derive(Parser)]
#[command(name = "dotbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game move by move, printing the board
    Demo {
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        /// First player's difficulty
        #[arg(long, default_value = "hard", value_parser = parse_difficulty)]
        one: Difficulty,
        /// Second player's difficulty
        #[arg(long, default_value = "medium", value_parser = parse_difficulty)]
        two: Difficulty,
        /// Seed for a reproducible game (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Pit two difficulties over many games and report the tally
    Match {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        /// First player's difficulty
        #[arg(long, default_value = "hard", value_parser = parse_difficulty)]
        one: Difficulty,
        /// Second player's difficulty
        #[arg(long, default_value = "easy", value_parser = parse_difficulty)]
        two: Difficulty,
        /// Seed for a reproducible tally (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    s.parse()
}

fn make_rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo {
            rows,
            cols,
            one,
            two,
            seed,
        }) => run_demo(rows, cols, [one, two], &mut make_rng(seed)),
        Some(Commands::Match {
            games,
            rows,
            cols,
            one,
            two,
            seed,
        }) => run_match(games, rows, cols, [one, two], &mut make_rng(seed)),
        None => run_demo(
            3,
            3,
            [Difficulty::Hard, Difficulty::Medium],
            &mut make_rng(None),
        ),
    }
}

fn tier_for(player: Player, tiers: [Difficulty; 2]) -> Difficulty {
    match player {
        Player::One => tiers[0],
        Player::Two => tiers[1],
    }
}

/// One full game; a closed box grants the scorer another turn.
fn play_game(
    rows: usize,
    cols: usize,
    tiers: [Difficulty; 2],
    rng: &mut Rng,
    verbose: bool,
) -> (usize, usize) {
    let mut board = Board::new(rows, cols);
    let mut previous = None;
    let mut player = Player::One;
    while let Some(edge) = select_move(&board, previous, tier_for(player, tiers), rng) {
        let result = board.draw(edge, player);
        debug_assert!(result.legal, "engine chose a drawn edge");
        if verbose {
            println!("{player} ({}) draws {edge}", tier_for(player, tiers));
            println!("{board}");
        }
        if result.closed == 0 {
            player = player.other();
        }
        previous = Some(edge);
    }
    (board.score(Player::One), board.score(Player::Two))
}

fn run_demo(rows: usize, cols: usize, tiers: [Difficulty; 2], rng: &mut Rng) -> Result<()> {
    ensure!(rows > 0 && cols > 0, "the board needs at least one box");
    println!(
        "Dots and Boxes: {} (P1) vs {} (P2) on {rows}x{cols}\n",
        tiers[0], tiers[1]
    );
    let (one, two) = play_game(rows, cols, tiers, rng, true);
    println!("Final: P1 {one} - {two} P2");
    Ok(())
}

fn run_match(
    games: usize,
    rows: usize,
    cols: usize,
    tiers: [Difficulty; 2],
    rng: &mut Rng,
) -> Result<()> {
    ensure!(rows > 0 && cols > 0, "the board needs at least one box");
    ensure!(games > 0, "nothing to play");

    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    for game in 0..games {
        // Alternate the opening seat so neither tier keeps the first-move
        // advantage across the tally.
        let swap = game % 2 == 1;
        let order = if swap { [tiers[1], tiers[0]] } else { tiers };
        let (one, two) = play_game(rows, cols, order, rng, false);
        let (first, second) = if swap { (two, one) } else { (one, two) };
        if first > second {
            wins[0] += 1;
        } else if second > first {
            wins[1] += 1;
        } else {
            draws += 1;
        }
    }

    println!(
        "{games} games, {} vs {}, {rows}x{cols} boxes:",
        tiers[0], tiers[1]
    );
    println!("  {:>8}: {} wins", tiers[0], wins[0]);
    println!("  {:>8}: {} wins", tiers[1], wins[1]);
    println!("  {:>8}: {draws}", "draws");
    Ok(())
}
